//! Orders Config

use clap::Args;
use orderdesk_app::domain::orders::{DEFAULT_CURRENCY, OrdersSettings};

/// Order intake settings.
#[derive(Debug, Args)]
pub struct OrdersConfig {
    /// Currency recorded for orders submitted without one
    #[arg(long, env = "DEFAULT_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub default_currency: String,
}

impl OrdersConfig {
    #[must_use]
    pub fn settings(&self) -> OrdersSettings {
        OrdersSettings {
            default_currency: self.default_currency.clone(),
        }
    }
}
