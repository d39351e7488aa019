//! Per-file content reading.

use std::fs;
use std::path::PathBuf;

use weldfile_core::FileRecord;

/// Read one file as UTF-8, capturing any failure as a record value.
///
/// Missing file, permission denied, invalid encoding: all land in
/// [`RecordBody::ReadError`] with the error's description. Nothing here
/// aborts a run.
///
/// [`RecordBody::ReadError`]: weldfile_core::RecordBody::ReadError
pub fn read_record(path: PathBuf) -> FileRecord {
    match fs::read_to_string(&path) {
        Ok(content) => FileRecord::text(path, content),
        Err(err) => FileRecord::read_error(path, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use weldfile_core::RecordBody;

    #[test]
    fn test_read_record_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.txt");
        std::fs::write(&path, "hello").unwrap();

        let record = read_record(path.clone());
        assert_eq!(record.path, path);
        assert_eq!(record.body, RecordBody::Text("hello".to_string()));
    }

    #[test]
    fn test_read_record_missing_file() {
        let record = read_record(PathBuf::from("/no/such/file.txt"));
        assert!(record.is_error());
    }

    #[test]
    fn test_read_record_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let record = read_record(path);
        match record.body {
            RecordBody::ReadError(message) => assert!(!message.is_empty()),
            RecordBody::Text(_) => panic!("Expected ReadError for invalid UTF-8"),
        }
    }
}
