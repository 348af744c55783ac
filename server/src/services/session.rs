//! Stateless signed session tokens.
//!
//! ARCHITECTURE
//! ============
//! A token is `base64url(claims_json) "." base64url(hmac_sha256(payload))`.
//! Nothing is stored server-side: validity is the signature plus `exp`.
//!
//! TRADE-OFFS
//! ==========
//! Logout only clears the cookie; a copied token stays valid until `exp`.
//! Rotating `SESSION_SECRET` invalidates every outstanding session.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use curator_client::net::types::SessionUser;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use time::{Duration, OffsetDateTime};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("malformed session token")]
    Malformed,

    #[error("session token signature mismatch")]
    BadSignature,

    #[error("session token expired")]
    Expired,

    #[error("session key rejected: {0}")]
    Key(String),

    #[error("session claims encode failed: {0}")]
    Encode(String),
}

/// Claims carried inside a session token. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    #[must_use]
    pub fn user(&self) -> SessionUser {
        SessionUser { id: self.sub.clone(), name: self.name.clone(), email: self.email.clone() }
    }
}

/// Issues and verifies session tokens with one HMAC key.
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
    max_age: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"<redacted>")
            .field("max_age", &self.max_age)
            .finish()
    }
}

impl TokenSigner {
    #[must_use]
    pub fn new(key: &[u8], max_age: Duration) -> Self {
        Self { key: key.to_vec(), max_age }
    }

    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    fn mac(&self) -> Result<HmacSha256, SessionError> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| SessionError::Key(e.to_string()))
    }

    /// Issue a token for `user` valid from `now` for `max_age`.
    ///
    /// # Errors
    ///
    /// Returns an error if the claims cannot be encoded.
    pub fn issue(&self, user: &SessionUser, now: OffsetDateTime) -> Result<String, SessionError> {
        let iat = now.unix_timestamp();
        let claims = SessionClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            iat,
            exp: iat + self.max_age.whole_seconds(),
        };
        let json = serde_json::to_vec(&claims).map_err(|e| SessionError::Encode(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] for tokens that do not decode,
    /// [`SessionError::BadSignature`] when the MAC does not match, and
    /// [`SessionError::Expired`] once `now` reaches `exp`.
    pub fn verify(&self, token: &str, now: OffsetDateTime) -> Result<SessionClaims, SessionError> {
        let (payload, signature) = token.split_once('.').ok_or(SessionError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| SessionError::Malformed)?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| SessionError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| SessionError::Malformed)?;
        let claims: SessionClaims = serde_json::from_slice(&json).map_err(|_| SessionError::Malformed)?;
        if claims.exp <= now.unix_timestamp() {
            return Err(SessionError::Expired);
        }
        Ok(claims)
    }
}
