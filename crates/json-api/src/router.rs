//! App Router

use salvo::{
    Router,
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};

use crate::{
    auth, config::cors::CorsConfig, healthcheck, observability::metrics_handler, orders,
    subscriptions,
};

/// Every application route. Storefront intake is public; dashboard routes sit
/// behind the bearer session middleware.
pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(Router::with_path("auth/login").post(auth::login::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("auth/verify").get(auth::verify::handler))
                .push(Router::with_path("auth/logout").post(auth::logout::handler))
                .push(Router::with_path("orders/{id}").delete(orders::delete::handler))
                .push(
                    Router::with_path("subscriptions")
                        .get(subscriptions::index::handler)
                        .push(Router::with_path("stats").get(subscriptions::stats::handler))
                        .push(Router::with_path("{id}").delete(subscriptions::delete::handler)),
                ),
        )
}

/// Browser access for the dashboard origin, or any origin when none is set.
pub fn cors_handler(config: &CorsConfig) -> CorsHandler {
    let origin = config
        .allowed_origin
        .as_deref()
        .map_or_else(AllowOrigin::any, AllowOrigin::from);

    Cors::new()
        .allow_origin(origin)
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .into_handler()
}

#[cfg(test)]
mod tests {
    use orderdesk_app::{
        auth::{AuthServiceError, MockAuthService, SessionTokenError},
        domain::orders::{MockOrdersService, stats::OrderStats},
    };
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use crate::test_helpers::{
        TEST_ORDER_UUID, state_with, strict_auth_mock, strict_orders_mock, test_session,
    };

    use super::*;

    fn make_service(orders: MockOrdersService, auth: MockAuthService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with(orders, auth)))
                .push(app_router()),
        )
    }

    fn auth_accepting(token: &'static str) -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_login().never();
        auth.expect_authenticate_bearer()
            .once()
            .withf(move |presented| presented == token)
            .return_once(|_| Ok(test_session()));

        auth
    }

    #[tokio::test]
    async fn test_order_listing_is_public() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().never();
        orders.expect_list_all_orders().never();
        orders.expect_order_stats().never();
        orders.expect_delete_order().never();
        orders.expect_list_orders().once().return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(orders, strict_auth_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_order_delete_requires_token() -> TestResult {
        let res = TestClient::delete(format!("http://example.com/orders/{TEST_ORDER_UUID}"))
            .send(&make_service(strict_orders_mock(), strict_auth_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login().never();
        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::Token(SessionTokenError::InvalidSignature)));

        let res = TestClient::get("http://example.com/subscriptions/stats")
            .add_header(AUTHORIZATION, "Bearer forged", true)
            .send(&make_service(strict_orders_mock(), auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_route_reaches_stats_handler() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().never();
        orders.expect_list_orders().never();
        orders.expect_list_all_orders().never();
        orders.expect_delete_order().never();
        orders
            .expect_order_stats()
            .once()
            .return_once(|| Ok(OrderStats::default()));

        let mut res = TestClient::get("http://example.com/subscriptions/stats")
            .add_header(AUTHORIZATION, "Bearer good", true)
            .send(&make_service(orders, auth_accepting("good")))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["total"], 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_route_echoes_user() -> TestResult {
        let mut res = TestClient::get("http://example.com/auth/verify")
            .add_header(AUTHORIZATION, "Bearer good", true)
            .send(&make_service(strict_orders_mock(), auth_accepting("good")))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["user"]["username"], "admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_needs_no_state() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(strict_orders_mock(), strict_auth_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
