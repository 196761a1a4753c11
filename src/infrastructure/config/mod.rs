//! Configuration management infrastructure
//!
//! Loads experiment parameters from YAML:
//! - Typed binding of the recognized keys
//! - Zero values for missing keys, unknown keys ignored
//! - Writing a record back out with the same keys

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
