//! Shared value types.

/// Raw SHA-256 digest of a file's content
pub type Digest = [u8; 32];

/// Number of hex characters in a rendered digest
pub const DIGEST_HEX_LEN: usize = 64;
