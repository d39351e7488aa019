//! Header block writing to the destination file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use weldfile_core::{CollectError, FileRecord, RecordBody};

/// Writes header blocks to the destination file.
///
/// The destination is created (or truncated) on construction. Callers must
/// finish with [`BlockWriter::finish`] so buffered output reaches disk; the
/// collector does this on every exit path.
#[derive(Debug)]
pub struct BlockWriter {
    inner: BufWriter<File>,
    path: PathBuf,
    compat_headers: bool,
    bytes_out: u64,
}

impl BlockWriter {
    /// Open the destination, truncating any existing content.
    pub fn create(path: impl Into<PathBuf>, compat_headers: bool) -> Result<Self, CollectError> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| CollectError::create(&path, e))?;
        Ok(Self {
            inner: BufWriter::new(file),
            path,
            compat_headers,
            bytes_out: 0,
        })
    }

    /// Write one record: header line, then raw content or an error
    /// placeholder. No normalization, no escaping.
    pub fn write_record(&mut self, record: &FileRecord) -> Result<(), CollectError> {
        let header = header_line(&record.path);
        self.write_str(&header)?;
        match &record.body {
            RecordBody::Text(content) => self.write_str(content)?,
            RecordBody::ReadError(message) => {
                // The original tool wrote the header twice for failed reads.
                if self.compat_headers {
                    self.write_str(&header)?;
                }
                self.write_str(&format!("[Error reading file: {message}]\n"))?;
            }
        }
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), CollectError> {
        self.inner
            .write_all(s.as_bytes())
            .map_err(|e| CollectError::write(&self.path, e))?;
        self.bytes_out += s.len() as u64;
        Ok(())
    }

    /// Bytes written so far, including buffered output.
    pub fn bytes_out(&self) -> u64 {
        self.bytes_out
    }

    /// Flush buffered output and sync the file to disk.
    pub fn finish(mut self) -> Result<u64, CollectError> {
        self.inner
            .flush()
            .map_err(|e| CollectError::write(&self.path, e))?;
        self.inner
            .get_ref()
            .sync_all()
            .map_err(|e| CollectError::write(&self.path, e))?;
        Ok(self.bytes_out)
    }
}

/// The delimiter line identifying a file's block in the output.
pub(crate) fn header_line(path: &Path) -> String {
    format!("\n--- FILE: {} ---\n", path.display())
}
