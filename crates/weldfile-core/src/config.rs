//! Collection run configuration.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::CollectError;

/// Default destination file name when none is given.
pub const DEFAULT_OUTPUT: &str = "combined_output.txt";

/// Configuration for a collection run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CollectConfig {
    /// Root directories to walk, in order.
    #[builder(default)]
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Destination file, created or truncated at the start of a run.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT)")]
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Follow symbolic links while walking.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum depth to descend (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Sort directory entries by file name so repeated runs produce
    /// byte-identical output. When false, OS directory order is used.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub sort_entries: bool,

    /// Write the header line a second time before an error placeholder,
    /// matching the historical output byte-for-byte.
    #[builder(default = "false")]
    #[serde(default)]
    pub compat_headers: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_true() -> bool {
    true
}

impl CollectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref output) = self.output {
            if output.as_os_str().is_empty() {
                return Err("Output path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl CollectConfig {
    /// Create a new config builder.
    pub fn builder() -> CollectConfigBuilder {
        CollectConfigBuilder::default()
    }

    /// Create a simple config for collecting the given roots.
    pub fn new(roots: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            roots,
            output: output.into(),
            follow_symlinks: false,
            max_depth: None,
            sort_entries: true,
            compat_headers: false,
        }
    }

    /// Load a config from a TOML manifest file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CollectError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CollectError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| CollectError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values a run cannot work with.
    pub fn validate(&self) -> Result<(), CollectError> {
        if self.output.as_os_str().is_empty() {
            return Err(CollectError::InvalidConfig {
                message: "Output path cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_OUTPUT)
    }
}
