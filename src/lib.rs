//! richcontext - experiment configuration for context-aware recommender runs
//!
//! Reads the YAML file that parameterizes an evaluation run (cross-validation
//! folds, top-N sizes, relevance threshold, seed, strategy, topic and factor
//! counts, context format, dataset) into a typed, read-only record.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `ExperimentConfig` record
//! - **Infrastructure Layer** (`infrastructure`): YAML loading and logging setup
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use richcontext::ConfigLoader;
//!
//! let config = ConfigLoader::load("properties.yaml")?;
//! println!("top-{} on {}", config.top_n(), config.dataset());
//! # Ok::<(), richcontext::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use domain::models::{ExperimentConfig, ExperimentConfigBuilder};
pub use infrastructure::config::{ConfigError, ConfigLoader};
