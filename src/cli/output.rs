//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ScanError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ScanError(ScanError::RootNotFound(path)) => {
            format!("error: directory {} does not exist", path.display())
        }
        ApiError::ScanError(ScanError::NotADirectory(path)) => {
            format!("error: {} is not a directory", path.display())
        }
        ApiError::ScanError(ScanError::UnreadableFile { path, source }) => format!(
            "error: cannot read {}: {}\nNo manifest was written. Use --keep-going to skip unreadable files.",
            path.display(),
            source
        ),
        other => format!("error: {}", other),
    }
}
