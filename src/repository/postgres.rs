use crate::api::item_management::models::{Item, ItemFields};
use crate::api::user_management::models::{NewUser, User};
use crate::db::Pool;
use crate::error::StoreResult;
use crate::repository::Repository;
use crate::schema::{items, users};
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;

type Conn = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Repository over the shared connection pool. Cloning shares the pool.
#[derive(Clone)]
pub(crate) struct PgRepository {
    pool: Pool,
}

impl PgRepository {
    pub(crate) fn new(pool: Pool) -> Self {
        PgRepository { pool }
    }

    fn conn(&self) -> StoreResult<Conn> {
        Ok(self.pool.get()?)
    }
}

impl Repository<Item> for PgRepository {
    fn find_all(&self) -> StoreResult<Vec<Item>> {
        let conn = self.conn()?;
        let list = items::table
            .order(items::id.asc())
            .load::<Item>(&*conn)?;
        Ok(list)
    }

    fn find_by_id(&self, id: i32) -> StoreResult<Option<Item>> {
        let conn = self.conn()?;
        let item = items::table.find(id).first::<Item>(&*conn).optional()?;
        Ok(item)
    }

    fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        let conn = self.conn()?;
        let found = diesel::select(exists(items::table.find(id))).get_result::<bool>(&*conn)?;
        Ok(found)
    }

    fn insert(&self, fields: &ItemFields) -> StoreResult<Item> {
        let conn = self.conn()?;
        let item = diesel::insert_into(items::table)
            .values(fields)
            .get_result::<Item>(&*conn)?;
        Ok(item)
    }

    fn save(&self, item: &Item) -> StoreResult<Item> {
        let conn = self.conn()?;
        let saved = diesel::update(items::table.find(item.id))
            .set(&ItemFields::from(item))
            .get_result::<Item>(&*conn)?;
        Ok(saved)
    }

    fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        let conn = self.conn()?;
        diesel::delete(items::table.find(id)).execute(&*conn)?;
        Ok(())
    }
}

impl Repository<User> for PgRepository {
    fn find_all(&self) -> StoreResult<Vec<User>> {
        let conn = self.conn()?;
        let list = users::table
            .order(users::id.asc())
            .load::<User>(&*conn)?;
        Ok(list)
    }

    fn find_by_id(&self, id: i32) -> StoreResult<Option<User>> {
        let conn = self.conn()?;
        let user = users::table.find(id).first::<User>(&*conn).optional()?;
        Ok(user)
    }

    fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        let conn = self.conn()?;
        let found = diesel::select(exists(users::table.find(id))).get_result::<bool>(&*conn)?;
        Ok(found)
    }

    fn insert(&self, new_user: &NewUser) -> StoreResult<User> {
        let conn = self.conn()?;
        let user = diesel::insert_into(users::table)
            .values(new_user)
            .get_result::<User>(&*conn)?;
        Ok(user)
    }

    fn save(&self, user: &User) -> StoreResult<User> {
        let conn = self.conn()?;
        let saved = diesel::update(users::table.find(user.id))
            .set(&NewUser::from(user))
            .get_result::<User>(&*conn)?;
        Ok(saved)
    }

    fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        let conn = self.conn()?;
        diesel::delete(users::table.find(id)).execute(&*conn)?;
        Ok(())
    }
}
