//! Delete Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use orderdesk_app::domain::orders::records::OrderUuid;

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete the order named by `id` on behalf of the signed-in admin.
pub(crate) async fn remove_order(depot: &Depot, id: &str) -> Result<(), ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.admin_session_or_401()?;

    let order = id
        .parse::<OrderUuid>()
        .map_err(|_ignored| ApiError::bad_request("Invalid order id"))?;

    state
        .app
        .orders
        .delete_order(order)
        .await
        .map_err(into_api_error)?;

    info!(order_uuid = %order, admin = %session.identity.username, "order deleted by admin");

    Ok(())
}

/// Delete Order Handler
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeletedResponse>, ApiError> {
    remove_order(depot, &id.into_inner()).await?;

    Ok(Json(DeletedResponse {
        success: true,
        message: "Order deleted successfully".to_string(),
    }))
}
