//! Collection progress reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Progress information during a collection run.
#[derive(Debug, Clone)]
pub struct CollectProgress {
    /// Number of header blocks written so far.
    pub files_written: u64,
    /// Number of contained read failures so far.
    pub read_errors: u64,
    /// Bytes written to the destination so far.
    pub bytes_out: u64,
    /// Root or file most recently processed.
    pub current_path: PathBuf,
    /// Time elapsed since the run started.
    pub elapsed: Duration,
}

impl CollectProgress {
    /// Create initial progress state.
    pub fn new() -> Self {
        Self {
            files_written: 0,
            read_errors: 0,
            bytes_out: 0,
            current_path: PathBuf::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Collection rate in files per second.
    pub fn files_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.files_written as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Collection rate in bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.bytes_out as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl Default for CollectProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_rates() {
        let progress = CollectProgress {
            files_written: 100,
            read_errors: 2,
            bytes_out: 4096,
            current_path: PathBuf::from("/src"),
            elapsed: Duration::from_secs(2),
        };

        assert_eq!(progress.files_per_second(), 50.0);
        assert_eq!(progress.bytes_per_second(), 2048.0);
    }

    #[test]
    fn test_progress_zero_elapsed() {
        let progress = CollectProgress::new();
        assert_eq!(progress.files_per_second(), 0.0);
        assert_eq!(progress.bytes_per_second(), 0.0);
    }
}
