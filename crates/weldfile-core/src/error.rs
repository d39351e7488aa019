//! Error and warning types for collection runs.
//!
//! Two tiers: [`CollectError`] is fatal for the whole run (the destination
//! cannot be created or written), while [`CollectWarning`] records traversal
//! problems that a run survives. Failures reading an individual file are not
//! errors at all; they are recorded inline as [`crate::RecordBody::ReadError`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run-fatal errors.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Destination file could not be created or truncated.
    #[error("Cannot create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the destination failed mid-run.
    #[error("Cannot write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file could not be read or parsed.
    #[error("Cannot load manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CollectError {
    /// Create a destination-creation error with path context.
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    /// Create a destination-write error with path context.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Kind of traversal warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A directory entry could not be listed or visited.
    WalkError,
    /// A root does not exist or is not a directory.
    MissingRoot,
}

/// Non-fatal warning encountered while walking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl CollectWarning {
    /// Create a new warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a walk error warning.
    pub fn walk_error(path: impl Into<PathBuf>, message: &str) -> Self {
        let path = path.into();
        Self {
            message: format!("Walk error: {message}"),
            path,
            kind: WarningKind::WalkError,
        }
    }

    /// Create a missing root warning.
    pub fn missing_root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Not a directory: {}", path.display()),
            path,
            kind: WarningKind::MissingRoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_error_create() {
        let err = CollectError::create(
            "/test/out.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CollectError::Create { .. }));
        assert!(err.to_string().contains("/test/out.txt"));
    }

    #[test]
    fn test_collect_warning_creation() {
        let warning = CollectWarning::missing_root("/test/root");
        assert_eq!(warning.kind, WarningKind::MissingRoot);
        assert!(warning.message.contains("Not a directory"));

        let warning = CollectWarning::walk_error("/test/dir", "permission denied");
        assert_eq!(warning.kind, WarningKind::WalkError);
        assert!(warning.message.contains("permission denied"));
    }
}
