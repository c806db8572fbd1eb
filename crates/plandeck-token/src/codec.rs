//! Token encoding and verification.

use crate::claims::ClaimSet;
use crate::error::{Rejection, TokenError};
use crate::secret::SigningSecret;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Stateless encoder and verifier for signed bearer tokens.
///
/// Wire format: `base64url(claims_json) "." base64url(hmac_sha256(claims_json))`.
/// The codec owns the signing secret for the process lifetime; construction is
/// the only place it enters, which keeps distinct codecs testable with
/// distinct secrets.
pub struct TokenCodec {
    secret: SigningSecret,
    ttl: Duration,
    clock_skew: Duration,
}

impl TokenCodec {
    /// Create a codec with the given secret, default token lifetime, and
    /// clock-skew grace window.
    pub fn new(secret: SigningSecret, ttl: Duration, clock_skew: Duration) -> Self {
        Self {
            secret,
            ttl,
            clock_skew,
        }
    }

    /// Issue a token for `subject` with the codec's default lifetime.
    pub fn issue(
        &self,
        subject: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, role, self.ttl)
    }

    /// Issue a token with an explicit lifetime.
    pub fn issue_with_ttl(
        &self,
        subject: impl Into<String>,
        role: impl Into<String>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.encode(&ClaimSet::new(subject, role, ttl))
    }

    /// Serialize and sign a claim set.
    pub fn encode(&self, claims: &ClaimSet) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims)
            .map_err(|e| TokenError::SerializationError(e.to_string()))?;
        let signature = self.sign(&payload);

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and extract its claim set.
    pub fn verify(&self, token: &str) -> Result<ClaimSet, Rejection> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit `now`.
    ///
    /// Checks run in a fixed order: structure, then signature, then expiry.
    /// The signature comparison goes through the MAC's constant-time
    /// verification; a byte-wise equality check here would leak tag prefixes
    /// through response timing.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<ClaimSet, Rejection> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(Rejection::Malformed)?;
        if payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(Rejection::Malformed);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| Rejection::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| Rejection::Malformed)?;

        let mut mac = self.mac();
        mac.update(&payload);
        if mac.verify_slice(&signature).is_err() {
            return Err(Rejection::BadSignature);
        }

        let claims: ClaimSet =
            serde_json::from_slice(&payload).map_err(|_| Rejection::Malformed)?;

        if claims.is_expired(now, self.clock_skew) {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = self.mac();
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any non-zero length, and SigningSecret
        // guarantees non-empty material.
        HmacSha256::new_from_slice(self.secret.as_bytes()).expect("key should be valid")
    }
}
