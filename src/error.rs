//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking, hashing, and writing a manifest
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root not found: {0:?}")]
    RootNotFound(PathBuf),

    #[error("Scan root is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to read file {path:?}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("Failed to write manifest to {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Application-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan error: {0}")]
    ScanError(#[from] ScanError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Manifest generated with {0} unreadable file(s)")]
    IncompleteManifest(usize),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
