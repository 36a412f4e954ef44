use crate::api::item_management::models::Item;
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::serde::json::Json;
use rocket::State;

#[get("/items")]
pub(crate) async fn get_items(store: &State<Store>) -> Result<Json<Vec<Item>>, ErrorResponse> {
    let item_list = store.run(|store| store.items.find_all()).await?;

    Ok(Json(item_list))
}
