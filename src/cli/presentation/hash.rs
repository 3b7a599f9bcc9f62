//! Hash presentation: one digest per file.

use crate::error::{ApiError, ScanError};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct HashLine {
    pub path: PathBuf,
    pub digest: String,
}

/// `<digest>  <path>` lines, the layout used by sha256sum.
pub fn format_hash_results_text(lines: &[HashLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}  {}", l.digest, l.path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_hash_results_json(lines: &[HashLine]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(lines).map_err(|e| ApiError::ScanError(ScanError::Serialize(e)))
}
