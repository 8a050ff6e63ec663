//! Runtime configuration providers.
//!
//! A provider answers two questions: is a recognized runtime configuration
//! active, and what does it contain. The launcher receives one explicitly
//! rather than reaching for process-global state.

use std::path::PathBuf;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::AppConfig;

/// Environment variable holding the path of the Clowder config document.
pub const ACG_CONFIG_VAR: &str = "ACG_CONFIG";

/// Source of the runtime configuration.
pub trait ConfigProvider {
    /// Whether a recognized runtime configuration is active.
    fn is_enabled(&self) -> bool;

    /// Load the configuration. Only meaningful when [`is_enabled`] is true.
    ///
    /// [`is_enabled`]: ConfigProvider::is_enabled
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// Provider backed by the JSON document Clowder mounts into the pod.
#[derive(Debug, Clone, Default)]
pub struct ClowderProvider {
    path: Option<PathBuf>,
}

impl ClowderProvider {
    /// Create a provider for an explicit config path. An empty path counts
    /// as absent.
    pub fn new(path: Option<impl Into<PathBuf>>) -> Self {
        let path: Option<PathBuf> = path
            .map(Into::into)
            .filter(|p| !p.as_os_str().is_empty());
        Self { path }
    }

    /// Create a provider from `ACG_CONFIG` in the current process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(ACG_CONFIG_VAR).map(PathBuf::from))
    }
}

impl ConfigProvider for ClowderProvider {
    fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    fn load(&self) -> Result<AppConfig, ConfigError> {
        let path = self.path.as_ref().ok_or(ConfigError::Unavailable)?;
        tracing::debug!(path = %path.display(), "Loading Clowder config");
        load_config(path)
    }
}

/// Provider holding an already-loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    config: Option<AppConfig>,
}

impl StaticProvider {
    /// An enabled provider returning `config`.
    pub fn enabled(config: AppConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// A provider reporting that no runtime configuration is active.
    pub fn disabled() -> Self {
        Self { config: None }
    }
}

impl ConfigProvider for StaticProvider {
    fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    fn load(&self) -> Result<AppConfig, ConfigError> {
        self.config.clone().ok_or(ConfigError::Unavailable)
    }
}
