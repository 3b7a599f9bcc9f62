//! Manifest builder: walk a tree, hash every regular file, write the result

use crate::error::ScanError;
use crate::manifest::Manifest;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// What to do when a single file or directory cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole scan on the first error
    #[default]
    FailFast,
    /// Record the failure and continue with the remaining entries
    KeepGoing,
}

/// A path that could not be hashed during a keep-going scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a completed scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub manifest: Manifest,
    /// Always empty under [`ErrorPolicy::FailFast`]
    pub failures: Vec<ScanFailure>,
    /// Total bytes of the files that were hashed
    pub bytes_hashed: u64,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Inputs for a full generate run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory to scan
    pub root: PathBuf,
    /// Where the manifest is written
    pub output: PathBuf,
    /// Write through a temp file and rename into place
    pub atomic_write: bool,
    pub follow_symlinks: bool,
    pub error_policy: ErrorPolicy,
}

impl GenerateRequest {
    /// Fail-fast, atomic, symlinks not followed
    pub fn new(root: PathBuf, output: PathBuf) -> Self {
        Self {
            root,
            output,
            atomic_write: true,
            follow_symlinks: false,
            error_policy: ErrorPolicy::FailFast,
        }
    }
}

/// Outcome of a generate run, for presentation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub root: PathBuf,
    pub output: PathBuf,
    pub algorithm: &'static str,
    pub file_count: usize,
    pub bytes_hashed: u64,
    pub elapsed_ms: u64,
    pub failures: Vec<ScanFailure>,
}

/// Builds manifests for a directory tree
pub struct ManifestBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
    error_policy: ErrorPolicy,
}

impl ManifestBuilder {
    /// Create a new builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Set walker config (symlink policy).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Walk the tree and hash every regular file below the root
    ///
    /// Files are hashed one at a time in walk order; only one file handle is
    /// open at any moment.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let root = path::canonicalize_root(&self.root)?;
        info!(canonical_root = %root.display(), "Starting scan");

        let walker = Walker::with_config(root.clone(), self.walker_config.clone());
        let mut manifest = Manifest::new();
        let mut failures = Vec::new();
        let mut bytes_hashed = 0u64;

        for entry in walker.entries() {
            let outcome = entry.and_then(|entry| match entry {
                Entry::File { path, size } => {
                    let key = path::relative_key(&root, &path)?;
                    let digest = hasher::hash_file(&path)?;
                    debug!(key = %key, size, "Hashed file");
                    Ok(Some((key, digest, size)))
                }
                Entry::Directory { .. } => Ok(None),
            });

            match outcome {
                Ok(Some((key, digest, size))) => {
                    bytes_hashed += size;
                    manifest.insert(key, digest);
                }
                Ok(None) => {}
                Err(e) => match self.error_policy {
                    ErrorPolicy::FailFast => {
                        error!("Scan aborted: {}", e);
                        return Err(e);
                    }
                    ErrorPolicy::KeepGoing => {
                        warn!("Skipping unreadable entry: {}", e);
                        failures.push(ScanFailure {
                            path: failure_path(&e).unwrap_or_else(|| root.clone()),
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        info!(
            files = manifest.len(),
            failures = failures.len(),
            bytes = bytes_hashed,
            duration_ms = start.elapsed().as_millis(),
            "Scan complete"
        );

        Ok(ScanReport {
            manifest,
            failures,
            bytes_hashed,
        })
    }
}

/// Scan `request.root` and write the manifest to `request.output`
///
/// Under fail-fast nothing is written when the scan fails. Under keep-going
/// the partial manifest is written and the failures are returned in the
/// summary.
pub fn generate(request: &GenerateRequest) -> Result<GenerateSummary, ScanError> {
    let start = Instant::now();
    let report = ManifestBuilder::new(request.root.clone())
        .with_walker_config(WalkerConfig {
            follow_symlinks: request.follow_symlinks,
        })
        .with_error_policy(request.error_policy)
        .build()?;
    report.manifest.write_to(&request.output, request.atomic_write)?;

    Ok(GenerateSummary {
        root: request.root.clone(),
        output: request.output.clone(),
        algorithm: hasher::ALGORITHM,
        file_count: report.manifest.len(),
        bytes_hashed: report.bytes_hashed,
        elapsed_ms: start.elapsed().as_millis() as u64,
        failures: report.failures,
    })
}

fn failure_path(err: &ScanError) -> Option<PathBuf> {
    match err {
        ScanError::UnreadableFile { path, .. } | ScanError::InvalidPath { path, .. } => {
            Some(path.clone())
        }
        ScanError::Walk(e) => e.path().map(Path::to_path_buf),
        _ => None,
    }
}
