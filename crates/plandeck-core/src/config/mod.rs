//! Configuration types for the Plandeck backend.
//!
//! Configuration is loaded from a single YAML file (`plandeck.yaml` by
//! default, overridable via the `PLANDECK_CONFIG` environment variable) and
//! deserialized into a [`PlandeckConfig`]. Every field has a serde default so
//! a partial file, or no file at all, still produces a usable configuration.
//! The one exception is the signing secret: it has no default and must be
//! supplied through one of the sources [`AuthConfig::resolve_secret`] consults.

pub mod auth;
pub mod server;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use auth::AuthConfig;
pub use server::ServerConfig;

/// Complete Plandeck configuration loaded from a file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlandeckConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "no signing secret configured (set auth.secret, the {0} environment variable, or auth.secret_file)"
    )]
    SecretMissing(String),
}

impl PlandeckConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load configuration from the conventional location.
    ///
    /// The path is taken from `PLANDECK_CONFIG` when set, falling back to
    /// `plandeck.yaml` in the working directory. A missing file yields the
    /// default configuration; secrets are still resolved separately and a
    /// missing secret remains fatal.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

fn config_path() -> PathBuf {
    if let Ok(p) = std::env::var("PLANDECK_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("plandeck.yaml")
}
