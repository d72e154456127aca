//! Verify Session Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::models::UserResponse, errors::ApiError, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Verify Session Handler
///
/// Echo the identity behind the presented token.
#[endpoint(
    tags("auth"),
    summary = "Verify Session",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<VerifyResponse>, ApiError> {
    let session = depot.admin_session_or_401()?;

    Ok(Json(VerifyResponse {
        success: true,
        user: session.identity.clone().into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{admin_service, orders_service, strict_orders_mock};

    use super::*;

    fn route() -> Router {
        Router::with_path("auth/verify").get(handler)
    }

    #[tokio::test]
    async fn test_verify_echoes_session_user() -> TestResult {
        let mut res = TestClient::get("http://example.com/auth/verify")
            .send(&admin_service(strict_orders_mock(), route()))
            .await;

        let body: VerifyResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.user.username, "admin");
        assert_eq!(body.user.role, "admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_without_session_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/auth/verify")
            .send(&orders_service(strict_orders_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
