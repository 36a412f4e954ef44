use crate::cors::Cors;
use crate::db::Store;
use crate::settings::DEFAULT_CORS_ORIGIN;
use rocket::local::blocking::Client;

/// Full router over empty in-memory tables.
pub(crate) fn client() -> Client {
    Client::tracked(crate::build(Store::in_memory(), Cors::new(DEFAULT_CORS_ORIGIN)))
        .expect("valid rocket instance")
}

pub(crate) fn store(client: &Client) -> &Store {
    client.rocket().state::<Store>().expect("store is managed")
}
