//! Single-operator credential check.
//!
//! Both sides are hashed with SHA-256 and compared over the full digest, so
//! the time taken does not depend on where a guess first differs. Username
//! and password are always both compared.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use curator_client::net::types::SessionUser;
use sha2::{Digest, Sha256};

/// Identifier carried by every operator session.
pub const OPERATOR_ID: &str = "1";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("invalid credentials")]
    Invalid,
}

/// The configured operator account.
#[derive(Clone)]
pub struct AdminAccount {
    username: String,
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn digests_equal(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl AdminAccount {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), username_digest: digest(username), password_digest: digest(password) }
    }

    /// Check a login submission against the configured pair.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Invalid`] for any mismatch, without
    /// saying which field was wrong.
    pub fn verify(&self, username: &str, password: &str) -> Result<SessionUser, CredentialsError> {
        let user_ok = digests_equal(&self.username_digest, &digest(username));
        let pass_ok = digests_equal(&self.password_digest, &digest(password));
        if user_ok & pass_ok {
            Ok(SessionUser {
                id: OPERATOR_ID.to_owned(),
                name: self.username.clone(),
                email: format!("{}@admin.local", self.username),
            })
        } else {
            Err(CredentialsError::Invalid)
        }
    }
}
