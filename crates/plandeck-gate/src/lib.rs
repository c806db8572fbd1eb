//! # plandeck-gate
//!
//! The authentication gate sitting in front of protected Plandeck operations.
//!
//! This crate provides functionality for:
//! - Extracting a bearer credential from an authorization header value
//! - Delegating verification to the token codec
//! - Resolving the verified subject through an injected user store
//! - Consulting an optional revocation capability
//! - Role gating over the resolved [`Identity`]
//!
//! The gate is stateless and safe for unbounded concurrent use: the only
//! shared data are the codec's immutable secret and whatever the injected
//! collaborators guard themselves. Every failure is a typed
//! [`Rejection`](plandeck_token::Rejection) value handed back to the routing
//! layer, which maps it to a response without leaking which check failed.

pub mod gate;
pub mod identity;
pub mod revocation;
pub mod store;

pub use gate::AuthGate;
pub use identity::Identity;
pub use revocation::{InMemoryRevocationList, RevocationCheck};
pub use store::{UserRecord, UserStore};

pub use plandeck_token::Rejection;
