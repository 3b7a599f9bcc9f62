//! Filesystem walker for traversing directory structures

use crate::error::ScanError;
use std::path::PathBuf;
use tracing::trace;
use walkdir::WalkDir;

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file with its path and size
    File { path: PathBuf, size: u64 },
    /// A directory below the root
    Directory { path: PathBuf },
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    ///
    /// When false, symlinks are neither followed nor recorded. When true,
    /// a link back to an ancestor directory is reported as a walk error.
    pub follow_symlinks: bool,
}

/// Filesystem walker
///
/// Visits every entry below the root exactly once with no depth limit.
/// Siblings are yielded in file-name order.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Lazily yield entries below the root
    ///
    /// Errors are yielded in place so the caller decides whether to stop;
    /// the underlying walk continues past an unreadable directory.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(ScanError::Walk(e))),
                };

                let file_type = entry.file_type();
                if file_type.is_dir() {
                    return Some(Ok(Entry::Directory {
                        path: entry.into_path(),
                    }));
                }
                if !file_type.is_file() {
                    // Unfollowed symlinks, sockets, fifos, devices
                    trace!(path = %entry.path().display(), "Skipping non-regular entry");
                    return None;
                }

                let size = match entry.metadata() {
                    Ok(metadata) => metadata.len(),
                    Err(e) => return Some(Err(ScanError::Walk(e))),
                };
                Some(Ok(Entry::File {
                    path: entry.into_path(),
                    size,
                }))
            })
    }

    /// Walk the filesystem and collect all entries, stopping at the first error
    pub fn walk(&self) -> Result<Vec<Entry>, ScanError> {
        self.entries().collect()
    }
}
