//! Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::DEFAULT_ORDER_LIST_LIMIT;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Largest page a caller may ask for.
pub(crate) const MAX_ORDER_LIST_LIMIT: u32 = 1_000;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Most recent orders first
    pub orders: Vec<OrderResponse>,
}

fn parse_limit(raw: Option<&str>) -> Result<u32, ApiError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ORDER_LIST_LIMIT);
    };

    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|limit| (1..=MAX_ORDER_LIST_LIMIT).contains(limit))
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "limit must be an integer between 1 and {MAX_ORDER_LIST_LIMIT}"
            ))
        })
}

/// Order Index Handler
///
/// Returns the most recent orders.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = parse_limit(limit.into_inner().as_deref())?;

    let orders = state
        .app
        .orders
        .list_orders(limit)
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use orderdesk_app::domain::orders::{
        MockOrdersService,
        records::{OrderStatus, OrderUuid},
    };

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").get(handler))
    }

    fn mock_expecting_list() -> MockOrdersService {
        let mut orders = MockOrdersService::new();

        orders.expect_submit_order().never();
        orders.expect_list_all_orders().never();
        orders.expect_order_stats().never();
        orders.expect_delete_order().never();

        orders
    }

    #[test]
    fn limit_defaults_and_bounds() {
        assert_eq!(parse_limit(None), Ok(DEFAULT_ORDER_LIST_LIMIT));
        assert_eq!(parse_limit(Some("25")), Ok(25));
        assert_eq!(parse_limit(Some("1000")), Ok(1_000));
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("1001")).is_err());
        assert!(parse_limit(Some("ten")).is_err());
    }

    #[tokio::test]
    async fn test_index_uses_default_limit() -> TestResult {
        let mut orders = mock_expecting_list();

        orders
            .expect_list_orders()
            .once()
            .withf(|limit| *limit == DEFAULT_ORDER_LIST_LIMIT)
            .return_once(|_| Ok(vec![]));

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert!(response.orders.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_orders_in_service_order() -> TestResult {
        let newer = OrderUuid::from_uuid(Uuid::now_v7());
        let older = OrderUuid::from_uuid(Uuid::now_v7());

        let mut orders = mock_expecting_list();

        orders
            .expect_list_orders()
            .once()
            .withf(|limit| *limit == 2)
            .return_once(move |_| {
                Ok(vec![
                    make_order(newer, Decimal::new(1999, 2), OrderStatus::Completed),
                    make_order(older, Decimal::new(500, 2), OrderStatus::Pending),
                ])
            });

        let response: OrdersResponse = TestClient::get("http://example.com/orders?limit=2")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        let ids: Vec<Uuid> = response.orders.iter().map(|order| order.id).collect();

        assert_eq!(ids, vec![newer.into_uuid(), older.into_uuid()]);

        let first = response.orders.first().ok_or("missing first order")?;

        assert_eq!(first.status, "completed");
        assert_eq!(first.interval.as_deref(), Some("monthly"));
        assert!((first.amount - 19.99).abs() < 1e-9, "unexpected amount {}", first.amount);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_rejects_bad_limit() -> TestResult {
        let mut orders = mock_expecting_list();

        orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/orders?limit=0")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
