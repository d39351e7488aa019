//! Per-file traversal records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of reading one visited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordBody {
    /// File content decoded as UTF-8.
    Text(String),
    /// Human-readable description of why the read failed.
    ReadError(String),
}

/// One visited file: the path the traversal produced and its
/// content-or-error pair. Read failures are values, not control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path as produced by the traversal, no canonicalization.
    pub path: PathBuf,
    /// Content or read failure.
    pub body: RecordBody,
}

impl FileRecord {
    /// Create a record for a successfully read file.
    pub fn text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: RecordBody::Text(content.into()),
        }
    }

    /// Create a record for a file that could not be read.
    pub fn read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: RecordBody::ReadError(message.into()),
        }
    }

    /// Whether this record carries a read failure instead of content.
    pub fn is_error(&self) -> bool {
        matches!(self.body, RecordBody::ReadError(_))
    }
}
