//! Subscription Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::subscriptions::SubscriptionView;

use crate::{
    errors::ApiError, extensions::*, orders::errors::into_api_error,
    subscriptions::models::SubscriptionResponse, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionsResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
}

/// Subscription Index Handler
///
/// Every stored order, most recent first, as a subscription.
#[endpoint(
    tags("subscriptions"),
    summary = "List Subscriptions",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SubscriptionsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_session_or_401()?;

    let orders = state
        .app
        .orders
        .list_all_orders()
        .await
        .map_err(into_api_error)?;

    Ok(Json(SubscriptionsResponse {
        subscriptions: orders
            .into_iter()
            .map(SubscriptionView::from)
            .map(SubscriptionResponse::from)
            .collect(),
    }))
}
