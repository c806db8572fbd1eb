//! Token revocation as an injected capability.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// Read-side revocation check consulted during authentication.
///
/// Injected into the gate rather than hardcoded, so the gate stays testable
/// with a fake and deployments without revocation simply omit it.
pub trait RevocationCheck: Send + Sync {
    /// Whether the given token id has been revoked.
    fn is_revoked(&self, token_id: &str) -> bool;
}

/// In-memory revocation list mapping token id to revocation time.
///
/// Reads vastly outnumber writes (every authenticated request vs. the odd
/// logout), so a read-write lock over a plain map is sufficient.
#[derive(Default)]
pub struct InMemoryRevocationList {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token id, recording when.
    pub fn revoke(&self, token_id: impl Into<String>) {
        let mut revoked = self.revoked.write().expect("revocation lock poisoned");
        revoked.insert(token_id.into(), Utc::now());
    }

    /// When the given token id was revoked, if it was.
    pub fn revoked_at(&self, token_id: &str) -> Option<DateTime<Utc>> {
        let revoked = self.revoked.read().expect("revocation lock poisoned");
        revoked.get(token_id).copied()
    }
}

impl RevocationCheck for InMemoryRevocationList {
    fn is_revoked(&self, token_id: &str) -> bool {
        let revoked = self.revoked.read().expect("revocation lock poisoned");
        revoked.contains_key(token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revocation_roundtrip() {
        let list = InMemoryRevocationList::new();
        assert!(!list.is_revoked("t1"));

        list.revoke("t1");
        assert!(list.is_revoked("t1"));
        assert!(list.revoked_at("t1").is_some());
        assert!(!list.is_revoked("t2"));
    }
}
