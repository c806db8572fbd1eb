//! # plandeck-token
//!
//! Signed bearer tokens for the Plandeck backend.
//!
//! This crate provides functionality for:
//! - Building claim sets carrying subject, role, timestamps, and a token id
//! - Handling the process-wide signing secret
//! - Issuing time-bounded tokens signed with HMAC-SHA256
//! - Verifying tokens back into claim sets, with a typed rejection taxonomy
//!
//! ## Token Model
//!
//! A token is `base64url(claims) "." base64url(signature)`: self-contained,
//! held only by the client, and verified statelessly on every request. The
//! server never stores issued tokens; a revocation list (kept by the caller)
//! keys on the claim set's `jti`.
//!
//! Verification failures are values, not faults: [`Rejection`] enumerates why
//! a token was refused, and the routing layer decides what the client sees.

pub mod claims;
pub mod codec;
pub mod error;
pub mod secret;

pub use claims::ClaimSet;
pub use codec::TokenCodec;
pub use error::{Rejection, TokenError};
pub use secret::SigningSecret;
