//! Auth Config

use clap::Args;
use jiff::SignedDuration;
use orderdesk_app::context::AuthSettings;
use zeroize::Zeroizing;

/// Admin login and session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Dashboard administrator username
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Dashboard administrator password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// HMAC key for session tokens, at least 32 bytes
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: String,

    /// Session lifetime in seconds
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = 86_400_i64)]
    pub session_ttl_seconds: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn settings(&self) -> AuthSettings {
        AuthSettings {
            admin_username: self.admin_username.clone(),
            admin_password: Zeroizing::new(self.admin_password.clone()),
            session_secret: Zeroizing::new(self.session_secret.clone()),
            session_ttl: SignedDuration::from_secs(self.session_ttl_seconds),
        }
    }
}
