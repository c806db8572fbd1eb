//! Authentication configuration.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for token issuance and verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Inline signing secret. Prefer the environment variable or a file;
    /// an inline secret ends up in the config file on disk.
    #[serde(default)]
    pub secret: Option<String>,

    /// Environment variable consulted for the signing secret.
    #[serde(default = "default_secret_env")]
    pub secret_env: String,

    /// Path to a file containing the signing secret.
    #[serde(default)]
    pub secret_file: Option<PathBuf>,

    /// Lifetime of issued tokens, in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,

    /// Grace window for expiry checks, in seconds. Absorbs clock drift
    /// between the issuing process and verifying process.
    #[serde(default = "default_clock_skew_secs")]
    pub clock_skew_secs: u64,

    /// Email of the admin user bootstrapped into an empty user store.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Default admin password. Prefer setting the `PLANDECK_ADMIN_PASSWORD`
    /// environment variable.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_secret_env() -> String {
    "PLANDECK_AUTH_SECRET".to_string()
}

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_clock_skew_secs() -> u64 {
    30
}

fn default_admin_email() -> String {
    "admin@plandeck.local".to_string()
}

fn default_admin_password() -> String {
    "changeme".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            secret_env: default_secret_env(),
            secret_file: None,
            token_ttl_secs: default_token_ttl_secs(),
            clock_skew_secs: default_clock_skew_secs(),
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

impl AuthConfig {
    /// Resolve the signing secret.
    ///
    /// Sources are consulted in order: inline value, environment variable,
    /// secret file. A missing secret is a startup-fatal [`ConfigError`];
    /// there is no default.
    pub fn resolve_secret(&self) -> Result<String, ConfigError> {
        if let Some(secret) = &self.secret {
            if !secret.is_empty() {
                return Ok(secret.clone());
            }
        }

        if let Ok(secret) = std::env::var(&self.secret_env) {
            if !secret.is_empty() {
                return Ok(secret);
            }
        }

        if let Some(path) = &self.secret_file {
            if path.exists() {
                let secret = std::fs::read_to_string(path)?;
                return Ok(secret.trim().to_string());
            }
        }

        Err(ConfigError::SecretMissing(self.secret_env.clone()))
    }
}
