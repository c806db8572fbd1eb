//! Request authentication in front of protected operations.

use crate::identity::Identity;
use crate::revocation::RevocationCheck;
use crate::store::UserStore;
use plandeck_token::{Rejection, TokenCodec};
use std::sync::Arc;

/// The gate between incoming requests and protected operations.
///
/// Holds no mutable state of its own: the codec carries the immutable signing
/// secret, the store is read-only, and the optional revocation list guards
/// itself. Any number of requests may authenticate concurrently.
pub struct AuthGate<S> {
    codec: Arc<TokenCodec>,
    store: Arc<S>,
    revocations: Option<Arc<dyn RevocationCheck>>,
}

impl<S: UserStore> AuthGate<S> {
    /// Create a gate over the given codec and user store.
    pub fn new(codec: Arc<TokenCodec>, store: Arc<S>) -> Self {
        Self {
            codec,
            store,
            revocations: None,
        }
    }

    /// Attach a revocation capability.
    pub fn with_revocations(mut self, revocations: Arc<dyn RevocationCheck>) -> Self {
        self.revocations = Some(revocations);
        self
    }

    /// Authenticate a request from its authorization header value.
    ///
    /// Yields the resolved identity, or the reason the credential was
    /// refused. Callers answer every rejection the same way; the specific
    /// reason is only logged here.
    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Identity, Rejection> {
        match self.check(authorization).await {
            Ok(identity) => Ok(identity),
            Err(rejection) => {
                tracing::debug!(reason = rejection.as_str(), "authentication rejected");
                Err(rejection)
            }
        }
    }

    async fn check(&self, authorization: Option<&str>) -> Result<Identity, Rejection> {
        let token = extract_bearer(authorization).ok_or(Rejection::Missing)?;
        let claims = self.codec.verify(token)?;

        if let Some(revocations) = &self.revocations {
            if revocations.is_revoked(&claims.jti) {
                return Err(Rejection::Revoked);
            }
        }

        // The subject must still exist: deleting a user invalidates every
        // outstanding token naming it.
        let record = self
            .store
            .lookup_user(&claims.sub)
            .await
            .ok_or(Rejection::Revoked)?;

        Ok(Identity {
            user_id: record.id,
            email: record.email,
            role: claims.role,
            token_id: claims.jti,
        })
    }
}

/// Extract the token from a bearer-style authorization header value.
fn extract_bearer(authorization: Option<&str>) -> Option<&str> {
    let value = authorization?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
