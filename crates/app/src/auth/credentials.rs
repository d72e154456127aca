//! Credential verification for dashboard logins.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::auth::{ADMIN_ROLE, AdminIdentity};

/// Resolves a username/password pair to the identity it belongs to.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `None` when the pair does not match any known account.
    fn verify(&self, username: &str, password: &str) -> Option<AdminIdentity>;
}

/// A single administrator account taken from configuration.
pub struct StaticCredentialVerifier {
    username: String,
    password: Zeroizing<String>,
}

impl StaticCredentialVerifier {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.username.clone(),
            username: self.username.clone(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

impl fmt::Debug for StaticCredentialVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentialVerifier")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Option<AdminIdentity> {
        // Compare fixed-size digests so the check does not short-circuit on length.
        let username_matches =
            Sha256::digest(username.as_bytes()) == Sha256::digest(self.username.as_bytes());
        let password_matches =
            Sha256::digest(password.as_bytes()) == Sha256::digest(self.password.as_bytes());

        (username_matches & password_matches).then(|| self.identity())
    }
}
