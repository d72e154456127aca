//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::{info, warn};

use crate::auth::{
    AdminIdentity, AdminSession, AuthConfigError, AuthServiceError, CredentialVerifier,
    IssuedSession, SessionClaims, SessionSecret, SessionTokenError, sign_session_token,
    verify_session_token,
};

/// Lifetime of a session when none is configured.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Issues and checks stateless signed sessions for the dashboard.
pub struct SessionAuthService {
    verifier: Arc<dyn CredentialVerifier>,
    secret: SessionSecret,
    ttl: SignedDuration,
}

impl SessionAuthService {
    /// # Errors
    ///
    /// Returns [`AuthConfigError::NonPositiveTtl`] when `ttl` is zero or negative.
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        secret: SessionSecret,
        ttl: SignedDuration,
    ) -> Result<Self, AuthConfigError> {
        if !ttl.is_positive() {
            return Err(AuthConfigError::NonPositiveTtl);
        }

        Ok(Self {
            verifier,
            secret,
            ttl,
        })
    }

    /// Issue a session for `identity` without checking credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be signed.
    pub fn issue_session(
        &self,
        identity: AdminIdentity,
        now: Timestamp,
    ) -> Result<IssuedSession, AuthServiceError> {
        let expires_at = now
            .checked_add(self.ttl)
            .ok()
            .ok_or(SessionTokenError::Encoding)?;

        let claims = SessionClaims::for_identity(&identity, now, expires_at);
        let token = sign_session_token(&claims, &self.secret)?;

        Ok(IssuedSession {
            token,
            session: claims.into_session()?,
        })
    }

    fn check_bearer(&self, token: &str, now: Timestamp) -> Result<AdminSession, AuthServiceError> {
        let claims = verify_session_token(token, &self.secret, now)?;

        Ok(claims.into_session()?)
    }
}

impl std::fmt::Debug for SessionAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthService")
            .field("secret", &self.secret)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for SessionAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AuthServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthServiceError::MissingCredentials);
        }

        let Some(identity) = self.verifier.verify(username, password) else {
            warn!(username, "rejected admin login");
            return Err(AuthServiceError::InvalidCredentials);
        };

        let issued = self.issue_session(identity, Timestamp::now())?;

        info!(
            username = %issued.session.identity.username,
            expires_at = %issued.session.expires_at,
            "admin session issued"
        );

        Ok(issued)
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<AdminSession, AuthServiceError> {
        self.check_bearer(bearer_token, Timestamp::now())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and mint a session token.
    async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AuthServiceError>;

    /// Resolve a raw bearer token to the session it encodes.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<AdminSession, AuthServiceError>;
}
