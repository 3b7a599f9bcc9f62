//! fsmanifest: checksum manifests for directory trees
//!
//! Walks a directory, computes a SHA-256 digest for every regular file, and
//! writes a JSON manifest mapping each relative path to its digest so the tree
//! can later be checked for added, removed, or modified files.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;

pub use manifest::Manifest;
pub use tree::builder::{generate, ErrorPolicy, GenerateRequest, GenerateSummary, ManifestBuilder};
