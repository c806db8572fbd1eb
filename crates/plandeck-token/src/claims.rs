//! Claim sets carried inside signed tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The structured payload inside a token.
///
/// A claim set is created once at issuance and never mutated afterwards; the
/// token signature covers its serialized form byte for byte. Timestamps are
/// serialized as Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject identifier (user id).
    pub sub: String,

    /// Role tag granted to the subject for the token's lifetime.
    pub role: String,

    /// When the token was issued.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// When the token expires.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,

    /// Unique token id; the handle a revocation list keys on.
    pub jti: String,
}

impl ClaimSet {
    /// Create a claim set issued now with the given lifetime.
    pub fn new(subject: impl Into<String>, role: impl Into<String>, ttl: Duration) -> Self {
        Self::issued_at(subject, role, ttl, Utc::now())
    }

    /// Create a claim set with an explicit issue time.
    pub fn issued_at(
        subject: impl Into<String>,
        role: impl Into<String>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.into(),
            role: role.into(),
            issued_at: now,
            expires_at: now + ttl,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check whether the claim set is expired at `now`.
    ///
    /// `skew` extends the expiry instant to absorb clock drift between the
    /// issuing and verifying processes; the token is expired once
    /// `now >= expires_at + skew`.
    pub fn is_expired(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        now >= self.expires_at + skew
    }

    /// Get time until expiration (negative once past it).
    pub fn time_until_expiration(&self) -> Duration {
        self.expires_at - Utc::now()
    }
}
