//! Integration tests for manifest completeness, key encoding, and output format

use super::test_utils::{sample_tree, scan, write_file};
use fsmanifest::manifest::Manifest;
use fsmanifest::tree::builder::{generate, GenerateRequest};
use fsmanifest::types::DIGEST_HEX_LEN;
use std::fs;
use tempfile::TempDir;

/// Every regular file at any depth gets exactly one entry
#[test]
fn test_manifest_is_complete() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let mut expected = Vec::new();
    for i in 0..5 {
        for depth in 0..4 {
            let mut relative = String::new();
            for d in 0..depth {
                relative.push_str(&format!("dir{}/", d));
            }
            relative.push_str(&format!("file{}.txt", i));
            write_file(root, &relative, format!("{}-{}", i, depth).as_bytes());
            expected.push(relative);
        }
    }
    expected.sort();

    let manifest = scan(root);
    let keys: Vec<String> = manifest.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, expected);
}

/// Keys are relative, use '/', and never include the root directory's name
#[test]
fn test_nested_path_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("SomeProject");
    write_file(&root, "a/b/c/d.txt", b"nested");

    let manifest = scan(&root);
    let keys: Vec<&str> = manifest.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a/b/c/d.txt"]);
    assert!(!keys[0].contains("SomeProject"));
    assert!(!keys[0].starts_with('/'));
}

/// Relative scan roots produce the same keys as absolute ones
#[test]
fn test_relative_and_absolute_root_agree() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let absolute = scan(temp_dir.path());
    let dotted = scan(&temp_dir.path().join("subdir").join(".."));
    assert_eq!(absolute, dotted);
}

/// Every digest is 64 lowercase hex characters
#[test]
fn test_digest_format() {
    let temp_dir = TempDir::new().unwrap();
    sample_tree(temp_dir.path());

    let manifest = scan(temp_dir.path());
    assert_eq!(manifest.len(), 4);
    for (key, digest) in manifest.iter() {
        assert_eq!(digest.len(), DIGEST_HEX_LEN, "{}", key);
        assert!(
            digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "{} has non-lowercase-hex digest {}",
            key,
            digest
        );
    }
}

/// Directories alone produce an empty object
#[test]
fn test_empty_tree_writes_empty_object() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(root.join("x").join("y")).unwrap();
    let output = temp_dir.path().join("manifest.json");

    let summary = generate(&GenerateRequest::new(root, output.clone())).unwrap();

    assert_eq!(summary.file_count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "{}\n");
}

/// Output uses 4-space indentation and parses back to the same manifest
#[test]
fn test_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_file(&root, "file1.txt", b"");
    write_file(&root, "subdir/file2.bin", b"test");
    let output = temp_dir.path().join("manifest.json");

    generate(&GenerateRequest::new(root.clone(), output.clone())).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        concat!(
            "{\n",
            "    \"file1.txt\": \"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\",\n",
            "    \"subdir/file2.bin\": \"9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08\"\n",
            "}\n"
        )
    );
    assert_eq!(Manifest::read_from(&output).unwrap(), scan(&root));
}

/// An existing manifest is replaced wholesale, not merged
#[test]
fn test_existing_output_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_file(&root, "only.txt", b"1");
    let output = temp_dir.path().join("manifest.json");
    fs::write(&output, "{\"stale.txt\": \"00\", \"other\": \"11\"}").unwrap();

    for atomic in [true, false] {
        let mut request = GenerateRequest::new(root.clone(), output.clone());
        request.atomic_write = atomic;
        generate(&request).unwrap();

        let manifest = Manifest::read_from(&output).unwrap();
        assert_eq!(manifest.len(), 1);
        assert!(manifest.get("stale.txt").is_none());
    }
}

/// Writing into a directory that cannot hold the output fails
#[test]
fn test_unwritable_output_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_file(&root, "a.txt", b"a");
    // A regular file where the output's parent directory should be
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = generate(&GenerateRequest::new(root, blocker.join("manifest.json")));
    assert!(matches!(
        result,
        Err(fsmanifest::error::ScanError::OutputWrite { .. })
    ));
}
