//! Configuration loading for gomate.
//!
//! Configuration is loaded from a TOML file (default: `<data-dir>/gomate.toml`).
//! Every field has a default, so a missing file or section is fine.

use gomate_client::ApiConfig;
use gomate_core::{CANDIDATE_COUNTRIES, DEFAULT_SAMPLE_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "gomate.toml";

/// Root configuration for gomate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Remote service endpoints.
    #[serde(default)]
    pub api: ApiConfig,
    /// Destination fetch settings.
    #[serde(default)]
    pub destinations: DestinationsConfig,
    /// Persisted state settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Destination fetch configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationsConfig {
    /// Destinations per fetch (default: 10, at most the candidate count).
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// RNG seed for reproducible fetches.
    pub seed: Option<u64>,
}

/// Persisted state configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    /// State file, relative to the data directory unless absolute
    /// (default: `state.json`).
    #[serde(default = "default_state_file")]
    pub file: PathBuf,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_state_file() -> PathBuf {
    PathBuf::from("state.json")
}

impl Default for DestinationsConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            seed: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_state_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// holds out-of-range values.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        match tokio::fs::try_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(path = ?path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }

        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(path = ?path, "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sample_size = self.destinations.sample_size;
        if sample_size == 0 || sample_size > CANDIDATE_COUNTRIES.len() {
            return Err(ConfigError::Invalid(format!(
                "destinations.sample_size must be between 1 and {}, got {}",
                CANDIDATE_COUNTRIES.len(),
                sample_size
            )));
        }
        Ok(())
    }

    /// Resolve the state file against the data directory.
    pub fn state_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.file)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
