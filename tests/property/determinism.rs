//! Property-based tests for digest determinism and chunking

use fsmanifest::tree::hasher;
use proptest::prelude::*;

proptest! {
    /// Chunked hashing matches one-shot hashing for any content and chunk size
    #[test]
    fn chunked_equals_one_shot(
        content in proptest::collection::vec(any::<u8>(), 0..20_000),
        chunk_size in 1usize..9_000,
    ) {
        let chunked = hasher::hash_reader(content.as_slice(), chunk_size).unwrap();
        prop_assert_eq!(chunked, hasher::compute_content_hash(&content));
    }

    /// Rendered digests are always 64 lowercase hex characters
    #[test]
    fn hex_rendering_is_fixed_width(content in any::<Vec<u8>>()) {
        let hex = hasher::to_hex(&hasher::compute_content_hash(&content));
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    /// Distinct contents produce distinct digests
    #[test]
    fn distinct_content_distinct_digest(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
        prop_assume!(a != b);
        prop_assert_ne!(hasher::compute_content_hash(&a), hasher::compute_content_hash(&b));
    }
}

/// Manifest keys are stable for the same tree across repeated scans
#[test]
fn test_repeated_scans_property() {
    use fsmanifest::tree::builder::ManifestBuilder;

    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(16));
    runner
        .run(
            &proptest::collection::btree_map("[a-z]{1,8}", any::<Vec<u8>>(), 0..12),
            |files| {
                let temp_dir = tempfile::TempDir::new().unwrap();
                for (name, content) in &files {
                    std::fs::write(temp_dir.path().join(name), content).unwrap();
                }

                let first = ManifestBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();
                let second = ManifestBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();
                prop_assert_eq!(&first.manifest, &second.manifest);
                prop_assert_eq!(first.manifest.len(), files.len());
                for (name, content) in &files {
                    let expected = hasher::to_hex(&hasher::compute_content_hash(content));
                    prop_assert_eq!(first.manifest.get(name), Some(expected.as_str()));
                }
                Ok(())
            },
        )
        .unwrap();
}
