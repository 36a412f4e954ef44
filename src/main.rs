mod api;
mod cors;
mod db;
mod error;
mod repository;
mod schema;
mod settings;
#[cfg(test)]
mod testing;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

use cors::Cors;
use db::Store;
use error::StartupError;
use rocket::{Build, Rocket};
use settings::Settings;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

pub(crate) fn build(store: Store, cors: Cors) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(store)
        .mount("/", routes![cors::preflight])
        .mount(
            "/api",
            routes![
                crate::api::item_management::list::get_items,
                crate::api::item_management::get_item::get_item,
                crate::api::item_management::create::create_item,
                crate::api::item_management::edit::edit_item,
                crate::api::item_management::delete::delete_item,
                crate::api::diagnostics::hello::hello,
                crate::api::diagnostics::create_user::create_user,
            ],
        )
}

#[rocket::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();
    init_tracing();

    let settings = Settings::new()?;
    let store = Store::connect(&settings)?;

    let rocket = build(store, Cors::new(settings.cors_origin)).launch().await?;

    // The store is managed state; dropping the instance closes the pool.
    drop(rocket);
    tracing::info!("server stopped, database pool released");

    Ok(())
}
