//! The user-lookup collaborator.

use async_trait::async_trait;
use serde::Serialize;

/// A user as the persistence collaborator reports it.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    /// Stable user id; the subject issued into tokens.
    pub id: String,

    /// The user's email address.
    pub email: String,

    /// Role granted at the store level; issued into tokens at login.
    pub role: String,
}

/// Read-only lookup of users by subject id.
///
/// The gate makes a single bounded call per request and does not retry; retry
/// policy, if any, belongs to the implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve a subject id to a user record, or `None` when the subject no
    /// longer exists.
    async fn lookup_user(&self, subject_id: &str) -> Option<UserRecord>;
}
