//! Manifest model and persistence
//!
//! A manifest maps `/`-separated paths relative to the scan root to lowercase
//! hex SHA-256 digests. It serializes as a single flat JSON object with
//! 4-space indentation and keys in sorted order, so two scans of an unchanged
//! tree produce byte-identical files.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default manifest file name, resolved against the working directory
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.json";

const INDENT: &[u8] = b"    ";

/// Relative path to digest mapping for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    files: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a digest for `key`, returning the previous digest if any
    pub fn insert(&mut self, key: String, digest: String) -> Option<String> {
        self.files.insert(key, digest)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.files.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to indented JSON with a trailing newline
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ScanError> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        out.push(b'\n');
        Ok(out)
    }

    /// Parse a manifest previously written by [`Manifest::write_to`]
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ScanError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a manifest from disk
    pub fn read_from(path: &Path) -> Result<Self, ScanError> {
        let bytes = fs::read(path).map_err(|source| ScanError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Write the manifest to `path`, replacing anything already there
    ///
    /// With `atomic`, the bytes go to a hidden temp file in the same
    /// directory, are synced, then renamed over `path`. Without it the
    /// destination is truncated and written in place.
    pub fn write_to(&self, path: &Path, atomic: bool) -> Result<(), ScanError> {
        let output_error = |source| ScanError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        let bytes = self.to_json_bytes()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(output_error)?;
        }

        if !atomic {
            fs::write(path, &bytes).map_err(output_error)?;
            info!(path = %path.display(), entries = self.len(), "Manifest written");
            return Ok(());
        }

        let temp_path = temp_path_for(path);
        debug!(temp = %temp_path.display(), "Writing manifest to temp file");

        let result = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&temp_path, path));

        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(output_error(source));
        }

        info!(path = %path.display(), entries = self.len(), "Manifest written atomically");
        Ok(())
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Temp file path beside `path`: `dir/.name.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
