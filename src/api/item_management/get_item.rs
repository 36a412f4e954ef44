use crate::api::item_management::models::Item;
use crate::api::item_management::path_id;
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;
use rocket::State;

#[get("/items/<item_id>")]
pub(crate) async fn get_item(
    item_id: Result<i32, &str>,
    store: &State<Store>,
) -> Result<Json<Item>, ErrorResponse> {
    let item_id = path_id(item_id)?;

    store
        .run(move |store| store.items.find_by_id(item_id))
        .await?
        .map(Json)
        .ok_or(ErrorResponse::NotFound)
}
