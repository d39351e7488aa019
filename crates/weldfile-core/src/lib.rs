//! Core types for weldfile.
//!
//! This crate provides the fundamental data structures used throughout
//! the weldfile ecosystem: run configuration, the error/warning taxonomy,
//! per-file records, and run reports.

mod config;
mod error;
mod record;
mod report;

pub use config::{CollectConfig, CollectConfigBuilder, DEFAULT_OUTPUT};
pub use error::{CollectError, CollectWarning, WarningKind};
pub use record::{FileRecord, RecordBody};
pub use report::{CollectReport, CollectStats};
