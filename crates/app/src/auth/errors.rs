//! Auth service errors.

use thiserror::Error;

use crate::auth::SessionTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("session token rejected")]
    Token(#[from] SessionTokenError),
}

/// Startup-time problems with the auth configuration.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    #[error("session secret must be at least {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("session ttl must be positive")]
    NonPositiveTtl,
}
