//! Shared application state.

use crate::users::InMemoryUsers;
use chrono::Duration;
use plandeck_core::PlandeckConfig;
use plandeck_gate::{AuthGate, InMemoryRevocationList};
use plandeck_token::{SigningSecret, TokenCodec};
use std::sync::Arc;

/// State shared by every request handler.
///
/// The codec (and with it the signing secret) is built once here and never
/// replaced for the process lifetime.
pub struct AppState {
    pub cfg: PlandeckConfig,
    pub codec: Arc<TokenCodec>,
    pub users: Arc<InMemoryUsers>,
    pub revocations: Arc<InMemoryRevocationList>,
    pub gate: AuthGate<InMemoryUsers>,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Fails fast when no signing secret is configured; everything after
    /// startup reports auth failures as per-request rejections instead.
    pub fn init(cfg: &PlandeckConfig) -> anyhow::Result<Self> {
        let secret = SigningSecret::from_string(&cfg.auth.resolve_secret()?)?;
        let codec = Arc::new(TokenCodec::new(
            secret,
            Duration::seconds(cfg.auth.token_ttl_secs as i64),
            Duration::seconds(cfg.auth.clock_skew_secs as i64),
        ));

        let users = Arc::new(InMemoryUsers::new());
        bootstrap_admin(&users, cfg)?;

        let revocations = Arc::new(InMemoryRevocationList::new());
        let gate =
            AuthGate::new(codec.clone(), users.clone()).with_revocations(revocations.clone());

        Ok(Self {
            cfg: cfg.clone(),
            codec,
            users,
            revocations,
            gate,
        })
    }
}

/// On startup, if the store is empty, create a default admin user.
///
/// Password source (highest precedence first):
/// - env `PLANDECK_ADMIN_PASSWORD`
/// - config `auth.admin_password`
fn bootstrap_admin(users: &InMemoryUsers, cfg: &PlandeckConfig) -> anyhow::Result<()> {
    if !users.is_empty() {
        return Ok(());
    }

    let password = std::env::var("PLANDECK_ADMIN_PASSWORD")
        .unwrap_or_else(|_| cfg.auth.admin_password.clone());

    if password.trim().is_empty() {
        anyhow::bail!(
            "admin password is empty (set PLANDECK_ADMIN_PASSWORD or auth.admin_password)"
        );
    }

    users
        .create(&cfg.auth.admin_email, &password, "admin")
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    tracing::warn!(
        "bootstrapped admin user '{}' (password taken from env/config)",
        cfg.auth.admin_email
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_requires_a_secret() {
        let mut cfg = PlandeckConfig::default();
        cfg.auth.secret_env = "PLANDECK_TEST_NO_SUCH_SECRET".to_string();

        assert!(AppState::init(&cfg).is_err());
    }

    #[test]
    fn test_init_bootstraps_admin() {
        let mut cfg = PlandeckConfig::default();
        cfg.auth.secret = Some("state-test-secret".to_string());

        let state = AppState::init(&cfg).unwrap();
        let admin = state
            .users
            .verify_credentials(&cfg.auth.admin_email, &cfg.auth.admin_password)
            .unwrap();
        assert_eq!(admin.role, "admin");
    }
}
