//! The resolved, authenticated principal.

use serde::Serialize;

/// Identity of an authenticated principal, resolved from a verified token and
/// the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Subject the token was issued for.
    pub user_id: String,

    /// Email as the user store reports it.
    pub email: String,

    /// Role tag the token was issued with. A role change in the store takes
    /// effect at the next login, not on outstanding tokens.
    pub role: String,

    /// Id of the token this identity was resolved from; the handle handed to
    /// the revocation list on logout.
    pub token_id: String,
}

impl Identity {
    /// Check the identity's role tag.
    ///
    /// Pure comparison; the routing layer maps a mismatch to a forbidden
    /// response.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
