//! Run report and statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::config::CollectConfig;
use crate::error::CollectWarning;

/// Summary statistics for a collection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectStats {
    /// Number of header blocks written (one per visited file).
    pub files_written: u64,
    /// Number of blocks carrying an error placeholder instead of content.
    pub read_errors: u64,
    /// Total bytes written to the destination.
    pub bytes_out: u64,
    /// Number of roots walked.
    pub roots_scanned: u64,
}

impl CollectStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one written block.
    pub fn record_file(&mut self) {
        self.files_written += 1;
    }

    /// Record a contained per-file read failure.
    pub fn record_error(&mut self) {
        self.read_errors += 1;
    }

    /// Record a walked root.
    pub fn record_root(&mut self) {
        self.roots_scanned += 1;
    }

    /// Number of blocks that carried actual content.
    pub fn files_read(&self) -> u64 {
        self.files_written - self.read_errors
    }
}

/// Complete result of a collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectReport {
    /// Absolute path of the destination file.
    pub output_path: PathBuf,

    /// When this run was performed.
    pub collected_at: SystemTime,

    /// Duration of the run.
    pub duration: Duration,

    /// Configuration used.
    pub config: CollectConfig,

    /// Summary statistics.
    pub stats: CollectStats,

    /// Warnings encountered while walking.
    pub warnings: Vec<CollectWarning>,
}

impl CollectReport {
    /// Create a new report.
    pub fn new(
        output_path: PathBuf,
        config: CollectConfig,
        stats: CollectStats,
        duration: Duration,
        warnings: Vec<CollectWarning>,
    ) -> Self {
        Self {
            output_path,
            collected_at: SystemTime::now(),
            duration,
            config,
            stats,
            warnings,
        }
    }

    /// Number of header blocks in the output.
    pub fn files_written(&self) -> u64 {
        self.stats.files_written
    }

    /// Check if there were any warnings during the walk.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
