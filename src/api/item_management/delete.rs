use crate::api::item_management::path_id;
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::response::status::NoContent;
use rocket::State;

#[delete("/items/<item_id>")]
pub(crate) async fn delete_item(
    item_id: Result<i32, &str>,
    store: &State<Store>,
) -> Result<NoContent, ErrorResponse> {
    let item_id = path_id(item_id)?;

    // Not atomic: two concurrent deletes can both pass the check.
    let deleted = store
        .run(move |store| {
            if !store.items.exists_by_id(item_id)? {
                return Ok(false);
            }
            store.items.delete_by_id(item_id)?;
            Ok(true)
        })
        .await?;

    if !deleted {
        return Err(ErrorResponse::NotFound);
    }
    tracing::info!(id = item_id, "deleted item");

    Ok(NoContent)
}
