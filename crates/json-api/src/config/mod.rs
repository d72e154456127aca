//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    cors::CorsConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    orders::OrdersConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod orders;
pub(crate) mod server;

/// Orderdesk JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "orderdesk-json", about = "Orderdesk JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Order intake settings.
    #[command(flatten)]
    pub orders: OrdersConfig,

    /// Admin login and session settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Cross-origin settings for the dashboard.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
