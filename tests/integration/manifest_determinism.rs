//! Integration tests for manifest determinism and change sensitivity

use super::test_utils::{sample_tree, scan, write_file};
use fsmanifest::tree::builder::{generate, GenerateRequest};
use std::fs;
use tempfile::TempDir;

/// Two runs over an unmodified tree produce byte-identical output
#[test]
fn test_same_tree_same_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    sample_tree(&root);
    let out1 = temp_dir.path().join("first.json");
    let out2 = temp_dir.path().join("second.json");

    generate(&GenerateRequest::new(root.clone(), out1.clone())).unwrap();
    generate(&GenerateRequest::new(root, out2.clone())).unwrap();

    assert_eq!(fs::read(out1).unwrap(), fs::read(out2).unwrap());
}

/// Creation order does not affect the manifest
#[test]
fn test_creation_order_irrelevant() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    for name in ["z.txt", "m/a.txt", "a.txt"] {
        write_file(&first, name, name.as_bytes());
    }
    for name in ["a.txt", "m/a.txt", "z.txt"] {
        write_file(&second, name, name.as_bytes());
    }

    assert_eq!(scan(&first), scan(&second));
}

/// Changing one byte changes only that file's digest
#[test]
fn test_single_byte_change_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    sample_tree(root);
    write_file(root, "subdir/target.bin", &[0u8; 10_000]);

    let before = scan(root);

    let mut changed = vec![0u8; 10_000];
    changed[4096] = 1;
    write_file(root, "subdir/target.bin", &changed);

    let after = scan(root);
    assert_eq!(before.len(), after.len());
    for (key, digest) in before.iter() {
        if key == "subdir/target.bin" {
            assert_ne!(Some(digest), after.get(key));
        } else {
            assert_eq!(Some(digest), after.get(key), "{} should be unchanged", key);
        }
    }
}

/// Adding and removing files adds and removes exactly those keys
#[test]
fn test_additions_and_removals_visible() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    sample_tree(root);
    let before = scan(root);

    fs::remove_file(root.join("README")).unwrap();
    write_file(root, "new/added.txt", b"added");
    let after = scan(root);

    assert!(before.get("README").is_some());
    assert!(after.get("README").is_none());
    assert!(after.get("new/added.txt").is_some());
    assert_eq!(before.len(), after.len());
}
