use crate::api::user_management::models::NewUser;
use crate::db::Store;
use crate::error::ErrorResponse;
use rocket::State;

pub(crate) const USER_CREATED: &str =
    "User John Doe was successfully created and saved to the database.";

fn demo_user() -> NewUser {
    NewUser {
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        password: "password123".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    }
}

/// Inserts the same demo user on every call. Nothing is unique besides the id.
#[get("/create-user")]
pub(crate) async fn create_user(store: &State<Store>) -> Result<&'static str, ErrorResponse> {
    let user = store
        .run(|store| store.users.insert(&demo_user()))
        .await?;
    tracing::info!(id = user.id, username = %user.username, "created demo user");

    Ok(USER_CREATED)
}
