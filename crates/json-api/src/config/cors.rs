//! CORS Config

use clap::Args;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Origin allowed to call the API from a browser; any origin when unset
    #[arg(long = "cors-allowed-origin", env = "CORS_ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,
}
