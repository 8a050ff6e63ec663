//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider has no configuration to hand out.
    #[error("no runtime configuration available")]
    Unavailable,
}

/// Load configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_str(&content)
}

/// Parse configuration from an in-memory JSON document.
pub fn load_config_str(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}
