//! Run orchestration: walk every root, weld every file into the destination.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tokio::sync::broadcast;
use tracing::{info, warn};

use weldfile_core::{
    CollectConfig, CollectError, CollectReport, CollectStats, CollectWarning, RecordBody,
};

use crate::progress::CollectProgress;
use crate::reader::read_record;
use crate::walker::walk_root;
use crate::writer::BlockWriter;

/// How many blocks between progress broadcasts.
const PROGRESS_INTERVAL: u64 = 256;

/// Sequential collector: one writer, one root at a time, one file at a time.
pub struct Collector {
    progress_tx: broadcast::Sender<CollectProgress>,
}

impl Collector {
    /// Create a new collector.
    pub fn new() -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self { progress_tx }
    }

    /// Subscribe to progress updates for runs on this collector.
    pub fn subscribe(&self) -> broadcast::Receiver<CollectProgress> {
        self.progress_tx.subscribe()
    }

    /// Perform a collection run.
    ///
    /// Creates or truncates the destination, walks each root in order and
    /// writes one header block per visited file. Per-file read failures are
    /// recorded inline and never abort the run; only a destination that
    /// cannot be created or written is fatal. The destination is flushed on
    /// every exit path.
    pub fn run(&self, config: &CollectConfig) -> Result<CollectReport, CollectError> {
        config.validate()?;

        let start = Instant::now();
        let mut writer = BlockWriter::create(&config.output, config.compat_headers)?;
        let mut stats = CollectStats::new();
        let mut warnings = Vec::new();

        let outcome = self.collect_roots(config, &mut writer, &mut stats, &mut warnings, start);

        // Flush even when a destination write already failed; the original
        // error wins over any flush failure.
        let flushed = writer.finish();
        outcome?;
        stats.bytes_out = flushed?;

        for warning in &warnings {
            warn!(path = %warning.path.display(), "{}", warning.message);
        }

        let output_path = resolve_output_path(&config.output);
        info!(output = %output_path.display(), files = stats.files_written, "collection finished");

        Ok(CollectReport::new(
            output_path,
            config.clone(),
            stats,
            start.elapsed(),
            warnings,
        ))
    }

    fn collect_roots(
        &self,
        config: &CollectConfig,
        writer: &mut BlockWriter,
        stats: &mut CollectStats,
        warnings: &mut Vec<CollectWarning>,
        start: Instant,
    ) -> Result<(), CollectError> {
        for root in &config.roots {
            info!("Scanning: {}", root.display());
            stats.record_root();
            self.send_progress(stats, writer.bytes_out(), root.clone(), start);

            for path in walk_root(root, config, warnings) {
                let record = read_record(path);
                writer.write_record(&record)?;

                stats.record_file();
                if let RecordBody::ReadError(message) = &record.body {
                    stats.record_error();
                    warn!(path = %record.path.display(), "read failed: {message}");
                }

                if stats.files_written % PROGRESS_INTERVAL == 0 {
                    self.send_progress(stats, writer.bytes_out(), record.path, start);
                }
            }
        }

        Ok(())
    }

    fn send_progress(
        &self,
        stats: &CollectStats,
        bytes_out: u64,
        current_path: PathBuf,
        start: Instant,
    ) {
        let _ = self.progress_tx.send(CollectProgress {
            files_written: stats.files_written,
            read_errors: stats.read_errors,
            bytes_out,
            current_path,
            elapsed: start.elapsed(),
        });
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the destination to an absolute path for reporting.
fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }
    match output.canonicalize() {
        Ok(path) => path,
        Err(_) => std::env::current_dir()
            .map(|dir| dir.join(output))
            .unwrap_or_else(|_| output.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_single_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("x.txt"), "hello").unwrap();
        let out = temp.path().join("out.txt");

        let config = CollectConfig::new(vec![root.clone()], &out);
        let report = Collector::new().run(&config).unwrap();

        assert_eq!(report.files_written(), 1);
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            format!("\n--- FILE: {} ---\nhello", root.join("x.txt").display())
        );
    }

    #[test]
    fn test_run_reports_absolute_output() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out.txt");

        let config = CollectConfig::new(Vec::new(), &out);
        let report = Collector::new().run(&config).unwrap();

        assert!(report.output_path.is_absolute());
    }

    #[test]
    fn test_run_fatal_on_bad_destination() {
        let config = CollectConfig::new(Vec::new(), "/no/such/dir/out.txt");
        let err = Collector::new().run(&config).unwrap_err();
        assert!(matches!(err, CollectError::Create { .. }));
    }

    #[test]
    fn test_progress_subscription() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("x.txt"), "hello").unwrap();
        let out = temp.path().join("out.txt");

        let config = CollectConfig::new(vec![temp.path().to_path_buf()], &out);
        let collector = Collector::new();
        let mut progress_rx = collector.subscribe();

        collector.run(&config).unwrap();

        // At least the per-root update must have been broadcast.
        let progress = progress_rx.try_recv().unwrap();
        assert_eq!(progress.current_path, temp.path());
    }
}
