//! Integration tests for manifest generation

mod manifest_determinism;
mod manifest_generation;
mod test_utils;
