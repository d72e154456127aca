//! Order wire models.

use std::{str::FromStr, string::ToString};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::orders::records::Order;

use crate::errors::ApiError;

/// Convert a stored amount to the JSON number clients expect.
pub(crate) fn amount_to_json(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Parse a JSON number into an exact decimal, using its shortest decimal form
/// so `19.99` stays `19.99`.
pub(crate) fn amount_from_json(amount: f64) -> Option<Decimal> {
    if !amount.is_finite() {
        return None;
    }

    Decimal::from_str(&amount.to_string()).ok()
}

/// An amount as storefronts send it: a JSON number, or the numeric string some
/// platforms use for prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Exact decimal value. A blank string counts as no amount at all.
    pub(crate) fn into_decimal(self) -> Result<Option<Decimal>, ApiError> {
        let parsed = match self {
            Self::Number(amount) => amount_from_json(amount),
            Self::Text(text) => {
                let text = text.trim();

                if text.is_empty() {
                    return Ok(None);
                }

                Decimal::from_str(text)
                    .or_else(|_ignored| Decimal::from_scientific(text))
                    .ok()
            }
        };

        parsed
            .map(Some)
            .ok_or_else(|| ApiError::bad_request("Invalid amount"))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order identifier
    pub id: Uuid,

    /// The storefront's own order reference
    pub external_order_id: Option<String>,

    /// Same value as `external_order_id`, under the key older dashboards read
    pub shoptet_order_id: Option<String>,

    pub customer_email: String,

    pub product_id: Option<String>,

    pub product_name: Option<String>,

    pub amount: f64,

    pub currency: String,

    /// Billing interval, e.g. "monthly"
    pub interval: Option<String>,

    /// Integration the order came from
    pub source: Option<String>,

    pub payment_id: Option<String>,

    /// One of pending, completed or failed
    pub status: String,

    pub created_at: String,

    pub processed_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            shoptet_order_id: order.external_order_id.clone(),
            external_order_id: order.external_order_id,
            customer_email: order.customer_email,
            product_id: order.product_id,
            product_name: order.product_name,
            amount: amount_to_json(order.amount),
            currency: order.currency,
            interval: order.billing_interval,
            source: order.source,
            payment_id: order.payment_id,
            status: order.status.to_string(),
            created_at: order.created_at.to_string(),
            processed_at: order.processed_at.as_ref().map(ToString::to_string),
        }
    }
}
