//! Signing secret management.

use crate::error::TokenError;
use rand::RngCore;
use std::fmt;
use std::path::Path;

/// The process-wide secret used to sign and verify tokens.
///
/// Constructed once at startup from configuration and passed into the codec;
/// it is never mutated afterwards. The `Debug` impl redacts the material so
/// the secret cannot leak through logging.
#[derive(Clone)]
pub struct SigningSecret {
    bytes: Vec<u8>,
}

impl SigningSecret {
    /// Create a secret from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self { bytes })
    }

    /// Create a secret from a configured string value.
    pub fn from_string(secret: &str) -> Result<Self, TokenError> {
        Self::new(secret.as_bytes().to_vec())
    }

    /// Generate a new random 32-byte secret.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);

        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Load a secret from a file, trimming surrounding whitespace.
    pub fn load_from_file(path: &Path) -> Result<Self, TokenError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_string(content.trim())
    }

    /// Get the secret material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
