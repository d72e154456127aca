//! Request body helpers.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

/// Message returned when a request body is not the JSON object a route expects.
pub(crate) const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Parse the request body as JSON, reporting failures with the usual error body
/// instead of salvo's default page.
pub(crate) async fn parse_json_body<T: DeserializeOwned>(
    req: &mut Request,
) -> Result<T, ApiError> {
    req.parse_json::<T>().await.map_err(|error| {
        debug!(%error, "rejected request body");

        ApiError::bad_request(INVALID_JSON_BODY)
    })
}
