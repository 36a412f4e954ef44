use std::sync::Arc;

use crate::api::item_management::models::Item;
use crate::api::user_management::models::User;
use crate::error::StoreResult;
use crate::repository::postgres::PgRepository;
use crate::repository::Repository;
use crate::settings::Settings;
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use rocket::tokio::task;

pub(crate) type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

embed_migrations!();

/// Repositories handed to every request as managed state.
///
/// Dropping the last clone releases the connection pool.
#[derive(Clone)]
pub(crate) struct Store {
    pub(crate) items: Arc<dyn Repository<Item>>,
    pub(crate) users: Arc<dyn Repository<User>>,
}

impl Store {
    /// Opens the pool and brings the schema up to date.
    pub(crate) fn connect(settings: &Settings) -> StoreResult<Store> {
        let manager = ConnectionManager::<PgConnection>::new(settings.database_url.as_str());
        let pool = Pool::builder()
            .max_size(settings.database_pool_size)
            .build(manager)?;
        tracing::info!(
            max_connections = settings.database_pool_size,
            "connected to database"
        );

        run_migrations(&pool)?;

        let repository = PgRepository::new(pool);
        Ok(Store {
            items: Arc::new(repository.clone()),
            users: Arc::new(repository),
        })
    }

    /// Runs repository calls on the blocking thread pool, off the async workers.
    pub(crate) async fn run<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&Store) -> StoreResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let store = self.clone();
        task::spawn_blocking(move || f(&store)).await?
    }
}

pub(crate) fn run_migrations(pool: &Pool) -> StoreResult<()> {
    let conn = pool.get()?;
    embedded_migrations::run(&*conn)?;
    tracing::info!("database migrations are up to date");
    Ok(())
}
