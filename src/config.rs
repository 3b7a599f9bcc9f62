//! Configuration System
//!
//! Layered configuration for scans and logging. Values come from built-in
//! defaults, an optional global file, optional workspace files, and
//! `FSMANIFEST__*` environment variables; CLI flags are applied on top by the
//! binary.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::manifest::DEFAULT_MANIFEST_NAME;
use crate::tree::builder::ErrorPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::{ConfigLoader, ENV_PREFIX};
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FsManifestConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory to scan; no default, so `generate` needs `-d` when unset
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Manifest destination; relative paths resolve against the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Follow symbolic links during traversal
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Record unreadable files and continue instead of aborting
    #[serde(default)]
    pub keep_going: bool,

    /// Write via temp file + rename
    #[serde(default = "default_true")]
    pub atomic_write: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_NAME)
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: None,
            output: default_output(),
            follow_symlinks: false,
            keep_going: false,
            atomic_write: default_true(),
        }
    }
}

impl ScanConfig {
    pub fn error_policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::KeepGoing
        } else {
            ErrorPolicy::FailFast
        }
    }

    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self
            .root
            .as_ref()
            .is_some_and(|root| root.as_os_str().is_empty())
        {
            return Err("Scan root cannot be empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Err("Output path cannot be empty".to_string());
        }
        if self.output.is_dir() {
            return Err(format!(
                "Output path {:?} is a directory, expected a file path",
                self.output
            ));
        }
        Ok(())
    }
}

impl FsManifestConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        self.scan.validate().map_err(ApiError::ConfigError)?;
        self.logging.validate().map_err(ApiError::ConfigError)?;
        Ok(())
    }
}
