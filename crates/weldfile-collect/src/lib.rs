//! Sequential collection engine for weldfile.
//!
//! This crate walks each configured root depth-first and welds every file it
//! finds into a single destination file, one header block per file. Key
//! properties:
//!
//! - **Strictly sequential** traversal, one root and one file at a time
//! - **Contained read failures**: an unreadable file becomes an inline error
//!   placeholder, never an aborted run
//! - **Scoped destination**: created/truncated on entry, flushed on every
//!   exit path
//! - **Progress updates** via broadcast channel
//!
//! # Example
//!
//! ```rust,no_run
//! use weldfile_collect::{CollectConfig, Collector};
//!
//! let config = CollectConfig::new(vec!["src".into(), "docs".into()], "bundle.txt");
//! let collector = Collector::new();
//! let report = collector.run(&config).unwrap();
//!
//! println!("Wrote {} blocks to {}", report.files_written(), report.output_path.display());
//! ```

mod collector;
mod progress;
mod reader;
mod walker;
mod writer;

pub use collector::Collector;
pub use progress::CollectProgress;
pub use reader::read_record;
pub use walker::walk_root;
pub use writer::BlockWriter;

// Re-export core types for convenience
pub use weldfile_core::{
    CollectConfig, CollectError, CollectReport, CollectStats, CollectWarning, FileRecord,
    RecordBody, WarningKind,
};
