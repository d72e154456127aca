//! Create Order Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderdesk_app::domain::orders::{OrdersServiceError, data::OrderSubmission};

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{OrderOutcome, observe_order_submission},
    orders::{errors::into_api_error, models::AmountInput},
    state::State,
};

/// Order submission from a storefront.
///
/// Only `customer_email` and `amount` are required.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct CreateOrderRequest {
    /// The storefront's own order reference
    #[serde(default, alias = "shoptet_order_id")]
    pub external_order_id: Option<String>,

    #[serde(default, alias = "customerEmail")]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub product_name: Option<String>,

    /// A JSON number or a numeric string
    #[serde(default)]
    pub amount: Option<AmountInput>,

    /// Defaults to the server's configured currency
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default, alias = "interval")]
    pub billing_interval: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

impl CreateOrderRequest {
    fn into_submission(self) -> Result<OrderSubmission, ApiError> {
        let amount = match self.amount {
            Some(amount) => amount.into_decimal()?,
            None => None,
        };

        Ok(OrderSubmission {
            external_order_id: self.external_order_id,
            customer_email: self.customer_email,
            product_id: self.product_id,
            product_name: self.product_name,
            amount,
            currency: self.currency,
            billing_interval: self.billing_interval,
            source: self.source,
        })
    }
}

/// Order Processed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderProcessedResponse {
    pub success: bool,

    /// Identifier of the stored order
    pub order_id: Uuid,

    /// Generated payment confirmation
    pub payment_id: String,

    pub status: String,

    pub message: String,
}

/// Create Order Handler
///
/// Stores the order and marks it paid with a generated payment id.
#[endpoint(tags("orders"), summary = "Submit Order")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderProcessedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: CreateOrderRequest = parse_json_body(req).await?;
    let submission = request.into_submission()?;

    let processed = match state.app.orders.submit_order(submission).await {
        Ok(processed) => processed,
        Err(error) => {
            let outcome = if matches!(error, OrdersServiceError::Validation(_)) {
                OrderOutcome::Rejected
            } else {
                OrderOutcome::Failed
            };

            observe_order_submission(outcome);

            return Err(into_api_error(error));
        }
    };

    observe_order_submission(OrderOutcome::Completed);

    Ok(Json(OrderProcessedResponse {
        success: true,
        order_id: processed.order_uuid.into_uuid(),
        payment_id: processed.payment_id,
        status: processed.status.to_string(),
        message: "Order processed successfully".to_string(),
    }))
}
