//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use orderdesk_app::{
    auth::{ADMIN_ROLE, AdminIdentity, AdminSession, MockAuthService},
    context::AppContext,
    domain::orders::{
        MockOrdersService,
        records::{Order, OrderStatus, OrderUuid},
    },
};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_ORDER_UUID: OrderUuid = OrderUuid::from_uuid(Uuid::nil());

pub(crate) fn test_session() -> AdminSession {
    AdminSession {
        identity: AdminIdentity {
            id: "admin".to_string(),
            username: "admin".to_string(),
            role: ADMIN_ROLE.to_string(),
        },
        issued_at: Timestamp::UNIX_EPOCH,
        expires_at: Timestamp::MAX,
    }
}

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_admin_session(test_session());
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_order(uuid: OrderUuid, amount: Decimal, status: OrderStatus) -> Order {
    let processed = !status.is_pending();

    Order {
        uuid,
        external_order_id: Some("SHOP-1".to_string()),
        customer_email: "customer@example.com".to_string(),
        product_id: Some("sku-1".to_string()),
        product_name: None,
        amount,
        currency: "EUR".to_string(),
        billing_interval: Some("monthly".to_string()),
        source: Some("storefront".to_string()),
        payment_id: processed.then(|| "PAY_1700000000000_abc123xyz".to_string()),
        status,
        created_at: Timestamp::UNIX_EPOCH,
        processed_at: processed.then_some(Timestamp::UNIX_EPOCH),
    }
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit_order().never();
    orders.expect_list_orders().never();
    orders.expect_list_all_orders().never();
    orders.expect_order_stats().never();
    orders.expect_delete_order().never();

    orders
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn state_with(orders: MockOrdersService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext {
        orders: Arc::new(orders),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    state_with(orders, strict_auth_mock())
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(strict_orders_mock(), auth)
}

/// Mount `route` with the given orders mock and no auth gate.
pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}

/// Mount `route` behind an already-authenticated admin session.
pub(crate) fn admin_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_session)
            .push(route),
    )
}
