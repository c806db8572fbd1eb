//! In-memory user store with argon2-hashed credentials.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plandeck_gate::{UserRecord, UserStore};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// A stored user: the public record plus credential material.
#[derive(Debug, Clone)]
struct StoredUser {
    record: UserRecord,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Errors surfaced by account creation.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// In-memory user store keyed by user id.
///
/// Stands in for the persistence collaborator. The locking discipline is the
/// same a database-backed store would hide behind its pool: short read-mostly
/// critical sections, no lock held across awaits.
#[derive(Default)]
pub struct InMemoryUsers {
    users: RwLock<HashMap<String, StoredUser>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().expect("user lock poisoned").is_empty()
    }

    /// Create a user with a fresh id and an argon2-hashed password.
    ///
    /// Returns the public record and its creation time.
    pub fn create(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<(UserRecord, DateTime<Utc>), AccountError> {
        let mut users = self.users.write().expect("user lock poisoned");
        if users.values().any(|u| u.record.email == email) {
            return Err(AccountError::EmailTaken);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .to_string();

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            role: role.to_string(),
        };
        let created_at = Utc::now();
        users.insert(
            record.id.clone(),
            StoredUser {
                record: record.clone(),
                password_hash: hash,
                created_at,
            },
        );

        Ok((record, created_at))
    }

    /// Verify login credentials, returning the user record on success.
    ///
    /// Wrong email and wrong password are indistinguishable to the caller.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        let users = self.users.read().expect("user lock poisoned");
        let user = users.values().find(|u| u.record.email == email)?;

        let hash = PasswordHash::new(&user.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .ok()?;

        Some(user.record.clone())
    }

    /// List all user records.
    pub fn list(&self) -> Vec<UserRecord> {
        let users = self.users.read().expect("user lock poisoned");
        let mut records: Vec<_> = users.values().map(|u| u.record.clone()).collect();
        records.sort_by(|a, b| a.email.cmp(&b.email));
        records
    }

}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn lookup_user(&self, subject_id: &str) -> Option<UserRecord> {
        let users = self.users.read().expect("user lock poisoned");
        users.get(subject_id).map(|u| u.record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify() {
        let users = InMemoryUsers::new();
        let (record, _) = users.create("u1@example.com", "hunter2!", "member").unwrap();

        assert_eq!(record.email, "u1@example.com");
        assert_eq!(record.role, "member");

        let verified = users.verify_credentials("u1@example.com", "hunter2!").unwrap();
        assert_eq!(verified.id, record.id);
    }

    #[test]
    fn test_wrong_password_fails() {
        let users = InMemoryUsers::new();
        users.create("u1@example.com", "hunter2!", "member").unwrap();

        assert!(users.verify_credentials("u1@example.com", "wrong").is_none());
        assert!(users.verify_credentials("nobody@example.com", "hunter2!").is_none());
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let users = InMemoryUsers::new();
        users.create("u1@example.com", "hunter2!", "member").unwrap();

        assert!(matches!(
            users.create("u1@example.com", "other-pass", "member"),
            Err(AccountError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn test_lookup_by_subject_id() {
        let users = InMemoryUsers::new();
        let (record, _) = users.create("u1@example.com", "hunter2!", "member").unwrap();

        let found = users.lookup_user(&record.id).await.unwrap();
        assert_eq!(found.email, "u1@example.com");
        assert!(users.lookup_user("missing").await.is_none());
    }
}
