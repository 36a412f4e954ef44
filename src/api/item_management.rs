pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod get_item;
pub(crate) mod list;
pub(crate) mod models;

use crate::error::ErrorResponse;

/// Item ids that don't fit an `i32` are a client error, not a missing item.
pub(crate) fn path_id(raw: Result<i32, &str>) -> Result<i32, ErrorResponse> {
    raw.map_err(|value| {
        tracing::debug!(id = %value, "rejected item id");
        ErrorResponse::BadRequest
    })
}
