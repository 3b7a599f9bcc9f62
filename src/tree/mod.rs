//! Filesystem scanning
//!
//! Walks a directory tree, hashes each regular file, and collects the
//! results into a [`crate::manifest::Manifest`] keyed by relative path.

pub mod builder;
pub mod hasher;
pub mod path;
pub mod walker;
