//! Manifest keys from filesystem paths

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};

/// Separator used in every manifest key, independent of the host platform
pub const KEY_SEPARATOR: char = '/';

/// Resolve the scan root to an absolute, symlink-free path
///
/// Uses dunce so Windows roots are not rewritten to `\\?\` UNC form.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    dunce::canonicalize(root).map_err(|e| ScanError::InvalidPath {
        path: root.to_path_buf(),
        reason: format!("failed to canonicalize: {}", e),
    })
}

/// Build the manifest key for `path` relative to `root`
///
/// The key is the exact UTF-8 text of each relative component joined with
/// `/`. Names are not Unicode-normalized: `root` joined with the key names the
/// same file on disk. Paths outside the root, or not valid UTF-8, are rejected.
pub fn relative_key(root: &Path, path: &Path) -> Result<String, ScanError> {
    let invalid = |reason: String| ScanError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    };

    let relative = path
        .strip_prefix(root)
        .map_err(|_| invalid(format!("not under scan root {:?}", root)))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name
                    .to_str()
                    .ok_or_else(|| invalid("file name is not valid UTF-8".to_string()))?;
                parts.push(name);
            }
            Component::CurDir => {}
            other => return Err(invalid(format!("unexpected component {:?}", other))),
        }
    }

    if parts.is_empty() {
        return Err(invalid(format!("no path relative to {:?}", root)));
    }

    Ok(parts.join(&KEY_SEPARATOR.to_string()))
}
