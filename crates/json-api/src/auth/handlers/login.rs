//! Login Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use orderdesk_app::auth::AuthServiceError;

use crate::{auth::models::UserResponse, errors::ApiError, extensions::*, state::State};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,

    /// Bearer token for the dashboard routes
    pub token: String,

    pub user: UserResponse,
}

/// Login Handler
///
/// Exchange the admin credentials for a session token.
#[endpoint(tags("auth"), summary = "Log In")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: LoginRequest = parse_json_body(req).await?;

    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let issued = state
        .app
        .auth
        .login(&username, &password)
        .await
        .map_err(|error| match error {
            AuthServiceError::MissingCredentials => ApiError::bad_request(error.to_string()),
            AuthServiceError::InvalidCredentials => ApiError::unauthorized(error.to_string()),
            AuthServiceError::Token(source) => {
                error!("failed to issue session token: {source}");

                ApiError::internal()
            }
        })?;

    Ok(Json(LoginResponse {
        success: true,
        token: issued.token,
        user: issued.session.identity.into(),
    }))
}

#[cfg(test)]
mod tests {
    use orderdesk_app::auth::{IssuedSession, MockAuthService, SessionTokenError};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        errors::ErrorResponse,
        test_helpers::{state_with_auth, test_session},
    };

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(state_with_auth(auth)))
                .push(Router::with_path("auth/login").post(handler)),
        )
    }

    fn mock_expecting_login() -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        auth
    }

    #[tokio::test]
    async fn test_login_returns_token_and_user() -> TestResult {
        let mut auth = mock_expecting_login();

        auth.expect_login()
            .once()
            .withf(|username, password| username == "admin" && password == "secret")
            .return_once(|_, _| {
                Ok(IssuedSession {
                    token: "od_v1_claims.signature".to_string(),
                    session: test_session(),
                })
            });

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({"username": "admin", "password": "secret"}))
            .send(&make_service(auth))
            .await;

        let body: LoginResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.token, "od_v1_claims.signature");
        assert_eq!(
            body.user,
            UserResponse {
                id: "admin".to_string(),
                username: "admin".to_string(),
                role: "admin".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_login_missing_fields_returns_400() -> TestResult {
        let mut auth = mock_expecting_login();

        auth.expect_login()
            .once()
            .withf(|username, password| username == "admin" && password.is_empty())
            .return_once(|_, _| Err(AuthServiceError::MissingCredentials));

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({"username": "admin"}))
            .send(&make_service(auth))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Username and password are required");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_401() -> TestResult {
        let mut auth = mock_expecting_login();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({"username": "admin", "password": "nope"}))
            .send(&make_service(auth))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.error, "Invalid credentials");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_malformed_body_returns_400_json() -> TestResult {
        let mut auth = mock_expecting_login();

        auth.expect_login().never();

        let mut res = TestClient::post("http://example.com/auth/login")
            .raw_json("{\"username\": ")
            .send(&make_service(auth))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid JSON body");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_signing_failure_returns_500() -> TestResult {
        let mut auth = mock_expecting_login();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::Token(SessionTokenError::Encoding)));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({"username": "admin", "password": "secret"}))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
