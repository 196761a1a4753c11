use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::models::ExperimentConfig;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot access config file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse experiment config from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to render experiment config as YAML")]
    Serialize(#[source] serde_yaml::Error),
}

/// Loads experiment configuration from YAML documents
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the experiment configuration stored at `path`.
    ///
    /// The file is read in full and closed before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<ExperimentConfig, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::load_from_str(&contents, &path.display().to_string())?;
        info!(path = %path.display(), dataset = config.dataset(), "Loaded experiment config");
        Ok(config)
    }

    /// Parse an experiment configuration held in memory.
    ///
    /// `origin` names the document in error messages.
    pub fn load_from_str(yaml: &str, origin: &str) -> Result<ExperimentConfig, ConfigError> {
        // An empty or comment-only document is null rather than a mapping.
        let config = serde_yaml::from_str::<Option<ExperimentConfig>>(yaml)
            .map_err(|source| ConfigError::Parse {
                origin: origin.to_string(),
                source,
            })?
            .unwrap_or_default();

        for (key, value) in config.fields() {
            debug!(origin, key, value = %value, "experiment parameter");
        }
        Ok(config)
    }

    /// Render the configuration using its YAML keys.
    pub fn to_yaml(config: &ExperimentConfig) -> Result<String, ConfigError> {
        serde_yaml::to_string(config).map_err(ConfigError::Serialize)
    }

    /// Write the configuration to `path`, replacing any existing file.
    pub fn save(config: &ExperimentConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let yaml = Self::to_yaml(config)?;
        fs::write(path, yaml).map_err(|source| ConfigError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Saved experiment config");
        Ok(())
    }
}
