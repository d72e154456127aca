//! Subscription projection of orders for the dashboard.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::orders::records::{Order, OrderStatus, OrderUuid};

/// Plan label used when an order names neither a product nor a product id.
pub const DEFAULT_PLAN: &str = "Premium Plan";

/// Read-only view of an order as a subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionView {
    pub id: OrderUuid,
    pub customer_email: String,
    pub plan: String,
    pub amount: Decimal,
    pub currency: String,
    pub interval: Option<String>,
    pub status: &'static str,
    pub created_at: Timestamp,
    pub payment_id: Option<String>,
    pub external_order_id: Option<String>,
    pub source: Option<String>,
}

/// Dashboard vocabulary for an order status: completed orders are shown as
/// active subscriptions, everything else keeps its stored name.
#[must_use]
pub const fn subscription_status(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "active",
        OrderStatus::Pending | OrderStatus::Failed => status.as_str(),
    }
}

impl From<&Order> for SubscriptionView {
    fn from(order: &Order) -> Self {
        let plan = order
            .product_name
            .as_ref()
            .or(order.product_id.as_ref())
            .map_or_else(|| DEFAULT_PLAN.to_string(), Clone::clone);

        Self {
            id: order.uuid,
            customer_email: order.customer_email.clone(),
            plan,
            amount: order.amount,
            currency: order.currency.clone(),
            interval: order.billing_interval.clone(),
            status: subscription_status(order.status),
            created_at: order.created_at,
            payment_id: order.payment_id.clone(),
            external_order_id: order.external_order_id.clone(),
            source: order.source.clone(),
        }
    }
}

impl From<Order> for SubscriptionView {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}
