//! Error types for the token crate.

use thiserror::Error;

/// Errors that can occur while constructing secrets or issuing tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty.
    #[error("signing secret must not be empty")]
    EmptySecret,

    /// Failed to serialize the claim set.
    #[error("failed to serialize claims: {0}")]
    SerializationError(String),

    /// IO error (reading a secret file).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a presented token was refused.
///
/// Rejections are per-request values, never faults. Verification hands them
/// back to the caller, which keeps full control over the response shape: the
/// client sees a generic unauthorized answer, the log records the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No credential was presented.
    #[error("no credential presented")]
    Missing,

    /// The token's structure could not be parsed.
    #[error("token is malformed")]
    Malformed,

    /// The token's expiry is in the past.
    #[error("token has expired")]
    Expired,

    /// The signature does not match the claim payload.
    #[error("token signature mismatch")]
    BadSignature,

    /// The token, or the subject it names, has been revoked.
    #[error("token has been revoked")]
    Revoked,
}

impl Rejection {
    /// Stable lowercase name for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::Missing => "missing",
            Rejection::Malformed => "malformed",
            Rejection::Expired => "expired",
            Rejection::BadSignature => "bad-signature",
            Rejection::Revoked => "revoked",
        }
    }
}
