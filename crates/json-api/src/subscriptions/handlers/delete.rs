//! Delete Subscription Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    orders::delete::{DeletedResponse, remove_order},
};

/// Delete Subscription Handler
///
/// Subscriptions are orders, so this removes the underlying order.
#[endpoint(
    tags("subscriptions"),
    summary = "Delete Subscription",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeletedResponse>, ApiError> {
    remove_order(depot, &id.into_inner()).await?;

    Ok(Json(DeletedResponse {
        success: true,
        message: "Subscription deleted successfully".to_string(),
    }))
}
