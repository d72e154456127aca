//! App Context

use std::{fmt, sync::Arc};

use jiff::SignedDuration;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::{
    auth::{
        AuthConfigError, AuthService, SessionAuthService, SessionSecret,
        StaticCredentialVerifier,
    },
    database::{self, Db},
    domain::orders::{OrdersService, OrdersSettings, PgOrdersService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("invalid auth configuration")]
    Auth(#[from] AuthConfigError),
}

/// Admin account and session signing settings.
#[derive(Debug)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: Zeroizing<String>,
    pub session_secret: Zeroizing<String>,
    pub session_ttl: SignedDuration,
}

impl AuthSettings {
    /// Build the session service these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is too short or the ttl is not positive.
    pub fn build_service(&self) -> Result<SessionAuthService, AuthConfigError> {
        let verifier = StaticCredentialVerifier::new(
            self.admin_username.clone(),
            self.admin_password.as_str(),
        );

        SessionAuthService::new(
            Arc::new(verifier),
            SessionSecret::new(self.session_secret.as_bytes())?,
            self.session_ttl,
        )
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the auth settings are unusable or establishing a
    /// database connection fails.
    pub async fn from_database_url(
        url: &str,
        orders: OrdersSettings,
        auth: &AuthSettings,
    ) -> Result<Self, AppInitError> {
        let auth = auth.build_service()?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            orders: Arc::new(PgOrdersService::new(Db::new(pool), orders)),
            auth: Arc::new(auth),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{auth::MockAuthService, domain::orders::MockOrdersService};

    use super::*;

    #[test]
    fn debug_output_names_the_context_without_services() {
        let ctx = AppContext {
            orders: Arc::new(MockOrdersService::new()),
            auth: Arc::new(MockAuthService::new()),
        };

        assert_eq!(format!("{ctx:?}"), "AppContext { .. }");
    }

    #[test]
    fn short_session_secret_is_rejected_before_connecting() {
        let settings = AuthSettings {
            admin_username: "admin".to_string(),
            admin_password: Zeroizing::new("secret".to_string()),
            session_secret: Zeroizing::new("short".to_string()),
            session_ttl: SignedDuration::from_hours(24),
        };

        assert!(
            settings.build_service().is_err(),
            "a five byte secret should not build a session service"
        );
    }
}
