//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// The sample experiment file shipped with the evaluation scripts.
pub const EXAMPLE_CONFIG: &str = r#"cross_validation_num_folds: 5
topn_n: 10
topn_num_items: 100
rival_relevance_threshold: 4.0
rival_seed: 42
rival_evaluation_strategy: "relplus1"
topic_model_num_topics: 50
fm_num_factors: 8
context_format: "paper"
business_type: "yelp"
"#;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_config(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config fixture");
    (dir, path)
}
