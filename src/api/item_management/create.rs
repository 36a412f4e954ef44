use crate::api::item_management::models::{Item, ItemFields};
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;
use rocket::State;

#[post("/items", data = "<new_item>")]
pub(crate) async fn create_item(
    new_item: Json<ItemFields>,
    store: &State<Store>,
) -> Result<Json<Item>, ErrorResponse> {
    let new_item = new_item.into_inner();
    let item = store
        .run(move |store| store.items.insert(&new_item))
        .await?;
    tracing::info!(id = item.id, "created item");

    Ok(Json(item))
}
