//! Shared test utilities for integration tests

use fsmanifest::manifest::Manifest;
use fsmanifest::tree::builder::ManifestBuilder;
use std::fs;
use std::path::Path;

/// Write `content` at `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Build a manifest for `root` with default settings
pub fn scan(root: &Path) -> Manifest {
    let report = ManifestBuilder::new(root.to_path_buf()).build().unwrap();
    assert!(report.is_complete());
    report.manifest
}

/// A small tree with nesting, an empty file, and an empty directory
pub fn sample_tree(root: &Path) {
    write_file(root, "file1.txt", b"");
    write_file(root, "subdir/file2.bin", b"test");
    write_file(root, "a/b/c/d.txt", b"deep");
    write_file(root, "README", b"readme contents\n");
    fs::create_dir_all(root.join("empty")).unwrap();
}
