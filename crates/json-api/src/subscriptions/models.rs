//! Subscription wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::orders::{stats::OrderStats, subscriptions::SubscriptionView};

use crate::orders::models::amount_to_json;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionResponse {
    pub id: Uuid,

    pub customer_email: String,

    /// Product name, product id or the default plan label
    pub plan: String,

    pub amount: f64,

    pub currency: String,

    pub interval: Option<String>,

    /// active, pending or failed
    pub status: String,

    pub created_at: String,

    pub payment_id: Option<String>,

    pub external_order_id: Option<String>,

    /// Same value as `external_order_id`, under the key older dashboards read
    pub shoptet_order_id: Option<String>,

    pub source: Option<String>,
}

impl From<SubscriptionView> for SubscriptionResponse {
    fn from(view: SubscriptionView) -> Self {
        Self {
            id: view.id.into_uuid(),
            customer_email: view.customer_email,
            plan: view.plan,
            amount: amount_to_json(view.amount),
            currency: view.currency,
            interval: view.interval,
            status: view.status.to_string(),
            created_at: view.created_at.to_string(),
            payment_id: view.payment_id,
            shoptet_order_id: view.external_order_id.clone(),
            external_order_id: view.external_order_id,
            source: view.source,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatsResponse {
    pub active: u64,
    pub canceled: u64,
    pub pending: u64,
    pub total: u64,

    /// Revenue from completed orders, two decimal places
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
}

impl From<OrderStats> for StatsResponse {
    fn from(stats: OrderStats) -> Self {
        Self {
            active: stats.active,
            canceled: stats.canceled,
            pending: stats.pending,
            total: stats.total,
            total_revenue: amount_to_json(stats.total_revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn stats_serialize_with_camel_case_revenue() {
        let stats = StatsResponse::from(OrderStats {
            active: 2,
            canceled: 1,
            pending: 1,
            total: 4,
            total_revenue: Decimal::new(3050, 2),
        });

        assert_eq!(
            serde_json::to_value(&stats).expect("stats serialize"),
            json!({
                "active": 2,
                "canceled": 1,
                "pending": 1,
                "total": 4,
                "totalRevenue": 30.5,
            })
        );
    }
}
