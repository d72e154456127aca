//! Subscription Stats Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, orders::errors::into_api_error,
    subscriptions::models::StatsResponse, state::State,
};

/// Subscription Stats Handler
///
/// Counts by status and revenue from completed orders.
#[endpoint(
    tags("subscriptions"),
    summary = "Subscription Stats",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_session_or_401()?;

    let stats = state
        .app
        .orders
        .order_stats()
        .await
        .map_err(into_api_error)?;

    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use orderdesk_app::domain::orders::{MockOrdersService, stats::OrderStats};

    use crate::test_helpers::admin_service;

    use super::*;

    fn route() -> Router {
        Router::with_path("subscriptions/stats").get(handler)
    }

    fn mock_expecting_stats() -> MockOrdersService {
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().never();
        orders.expect_list_orders().never();
        orders.expect_list_all_orders().never();
        orders.expect_delete_order().never();

        orders
    }

    #[tokio::test]
    async fn test_stats_reports_counts_and_revenue() -> TestResult {
        let mut orders = mock_expecting_stats();

        orders.expect_order_stats().once().return_once(|| {
            Ok(OrderStats {
                active: 2,
                canceled: 1,
                pending: 1,
                total: 4,
                total_revenue: Decimal::new(3050, 2),
            })
        });

        let body: Value = TestClient::get("http://example.com/subscriptions/stats")
            .send(&admin_service(orders, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(body["active"], 2);
        assert_eq!(body["canceled"], 1);
        assert_eq!(body["pending"], 1);
        assert_eq!(body["total"], 4);
        assert_eq!(body["totalRevenue"], 30.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_for_empty_store_are_zero() -> TestResult {
        let mut orders = mock_expecting_stats();

        orders
            .expect_order_stats()
            .once()
            .return_once(|| Ok(OrderStats::default()));

        let stats: StatsResponse = TestClient::get("http://example.com/subscriptions/stats")
            .send(&admin_service(orders, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(stats.total, 0);
        assert!(stats.total_revenue.abs() < f64::EPSILON);

        Ok(())
    }
}
