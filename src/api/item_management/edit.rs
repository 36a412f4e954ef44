use crate::api::item_management::models::{Item, ItemFields};
use crate::api::item_management::path_id;
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;
use rocket::State;

/// Overwrites every field of an existing item. The id in the path wins over any
/// id in the body.
#[put("/items/<item_id>", data = "<changes>")]
pub(crate) async fn edit_item(
    item_id: Result<i32, &str>,
    changes: Json<ItemFields>,
    store: &State<Store>,
) -> Result<Json<Item>, ErrorResponse> {
    let item_id = path_id(item_id)?;
    let changes = changes.into_inner();

    // Lookup and write are separate statements; a concurrent delete in between
    // surfaces as a store error.
    let item = store
        .run(move |store| {
            let mut item = match store.items.find_by_id(item_id)? {
                Some(item) => item,
                None => return Ok(None),
            };
            item.overwrite(changes);
            store.items.save(&item).map(Some)
        })
        .await?
        .ok_or(ErrorResponse::NotFound)?;
    tracing::info!(id = item.id, "updated item");

    Ok(Json(item))
}
