//! Content checksums for manifest entries using SHA-256
//!
//! Files are folded into the hash in fixed-size chunks so peak memory stays
//! bounded regardless of file size. The algorithm is fixed: manifests produced
//! with different algorithms cannot be compared.

use crate::error::ScanError;
use crate::types::Digest;
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Name of the digest algorithm recorded in summaries
pub const ALGORITHM: &str = "sha256";

/// Bytes read per chunk when hashing a file
pub const CHUNK_SIZE: usize = 4096;

/// Compute the hex digest of the file at `path`
///
/// The file handle is released before this returns.
pub fn hash_file(path: &Path) -> Result<String, ScanError> {
    let unreadable = |source| ScanError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let digest = hash_reader(file, CHUNK_SIZE).map_err(unreadable)?;
    Ok(to_hex(&digest))
}

/// Fold a reader into a digest, reading at most `chunk_size` bytes at a time
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> std::io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let count = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..count]);
    }

    Ok(finalize(hasher))
}

/// Compute content hash for an in-memory buffer
pub fn compute_content_hash(content: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(content);
    finalize(hasher)
}

fn finalize(hasher: Sha256) -> Digest {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Render a digest as lowercase hex
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
