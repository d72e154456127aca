//! Logout Handler
//!
//! Sessions are stateless, so logging out only acknowledges the request. The
//! client discards its token.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Logout Handler
#[endpoint(
    tags("auth"),
    summary = "Log Out",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LogoutResponse>, ApiError> {
    let session = depot.admin_session_or_401()?;

    info!(username = %session.identity.username, "admin logged out");

    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}
