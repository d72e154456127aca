//! Session token signing and verification.
//!
//! Tokens look like `od_v1_{claims}.{signature}` where `claims` is the
//! base64url-encoded JSON [`SessionClaims`] and `signature` is the base64url
//! HMAC-SHA256 of everything before the dot.

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::auth::{AdminIdentity, AdminSession, AuthConfigError};

/// Session token identifier prefix.
pub const SESSION_TOKEN_PREFIX: &str = "od";

/// Shortest accepted signing secret.
pub const MIN_SESSION_SECRET_BYTES: usize = 32;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTokenVersion {
    V1,
}

impl SessionTokenVersion {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for SessionTokenVersion {
    type Err = SessionTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(SessionTokenError::UnsupportedVersion),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("session token format is invalid")]
    InvalidFormat,

    #[error("session token uses an unsupported version")]
    UnsupportedVersion,

    #[error("session token signature does not match")]
    InvalidSignature,

    #[error("session token has expired")]
    Expired,

    #[error("session token could not be encoded")]
    Encoding,
}

/// HMAC key used to sign and verify session tokens.
#[derive(Clone)]
pub struct SessionSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl SessionSecret {
    /// Wrap raw key material.
    ///
    /// # Errors
    ///
    /// Returns [`AuthConfigError::SecretTooShort`] for keys shorter than
    /// [`MIN_SESSION_SECRET_BYTES`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, AuthConfigError> {
        let bytes = Zeroizing::new(bytes.into());

        if bytes.len() < MIN_SESSION_SECRET_BYTES {
            return Err(AuthConfigError::SecretTooShort {
                min: MIN_SESSION_SECRET_BYTES,
                actual: bytes.len(),
            });
        }

        Ok(Self { bytes })
    }

    fn mac(&self, signing_input: &str) -> Result<HmacSha256, SessionTokenError> {
        let mut mac = HmacSha256::new_from_slice(&self.bytes)
            .ok()
            .ok_or(SessionTokenError::Encoding)?;

        mac.update(signing_input.as_bytes());

        Ok(mac)
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(**redacted**)")
    }
}

/// Signed token payload. Times are whole unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    #[must_use]
    pub fn for_identity(identity: &AdminIdentity, issued_at: Timestamp, expires_at: Timestamp) -> Self {
        Self {
            sub: identity.id.clone(),
            username: identity.username.clone(),
            role: identity.role.clone(),
            iat: issued_at.as_second(),
            exp: expires_at.as_second(),
        }
    }

    /// Convert verified claims into a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenError::InvalidFormat`] when a timestamp is out of range.
    pub fn into_session(self) -> Result<AdminSession, SessionTokenError> {
        let issued_at = Timestamp::from_second(self.iat)
            .ok()
            .ok_or(SessionTokenError::InvalidFormat)?;

        let expires_at = Timestamp::from_second(self.exp)
            .ok()
            .ok_or(SessionTokenError::InvalidFormat)?;

        Ok(AdminSession {
            identity: AdminIdentity {
                id: self.sub,
                username: self.username,
                role: self.role,
            },
            issued_at,
            expires_at,
        })
    }
}

/// Sign `claims` into a bearer token.
///
/// # Errors
///
/// Returns [`SessionTokenError::Encoding`] if the claims cannot be serialized.
pub fn sign_session_token(
    claims: &SessionClaims,
    secret: &SessionSecret,
) -> Result<String, SessionTokenError> {
    let payload = serde_json::to_vec(claims)
        .ok()
        .ok_or(SessionTokenError::Encoding)?;

    let signing_input = format!(
        "{SESSION_TOKEN_PREFIX}_{}_{}",
        SessionTokenVersion::V1.segment(),
        URL_SAFE_NO_PAD.encode(payload)
    );

    let signature = secret.mac(&signing_input)?.finalize().into_bytes();

    Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(signature)))
}

/// Check a bearer token's signature and expiry as of `now`.
///
/// # Errors
///
/// Returns the [`SessionTokenError`] describing why the token was rejected.
pub fn verify_session_token(
    token: &str,
    secret: &SessionSecret,
    now: Timestamp,
) -> Result<SessionClaims, SessionTokenError> {
    let (signing_input, signature) = token
        .rsplit_once('.')
        .ok_or(SessionTokenError::InvalidFormat)?;

    let mut parts = signing_input.splitn(3, '_');

    let prefix = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let version = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let payload = parts.next().ok_or(SessionTokenError::InvalidFormat)?;

    if prefix != SESSION_TOKEN_PREFIX {
        return Err(SessionTokenError::InvalidFormat);
    }

    SessionTokenVersion::from_str(version)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .ok()
        .ok_or(SessionTokenError::InvalidFormat)?;

    secret
        .mac(signing_input)?
        .verify_slice(&signature)
        .ok()
        .ok_or(SessionTokenError::InvalidSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .ok()
        .ok_or(SessionTokenError::InvalidFormat)?;

    let claims: SessionClaims = serde_json::from_slice(&payload)
        .ok()
        .ok_or(SessionTokenError::InvalidFormat)?;

    if now.as_second() >= claims.exp {
        return Err(SessionTokenError::Expired);
    }

    Ok(claims)
}
