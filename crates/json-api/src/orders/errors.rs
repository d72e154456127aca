//! Order Errors

use tracing::error;

use orderdesk_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::Validation(message) => ApiError::bad_request(message),
        OrdersServiceError::InvalidData => ApiError::bad_request("Invalid order data"),
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::NotFinalized => {
            error!("order left pending after submission");

            ApiError::internal()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            ApiError::internal()
        }
    }
}
