//! Generic CRUD access to entity tables.
//!
//! Handlers only see the [`Repository`] trait; the PostgreSQL implementation lives in
//! [`postgres`], and tests swap in the in-memory one.

use crate::error::StoreResult;

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod postgres;

/// A record stored in its own table, keyed by a store-generated `i32`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Every column except the primary key.
    type Fields: Clone + Send + Sync;
}

pub trait Repository<E: Entity>: Send + Sync {
    /// All rows in ascending id order.
    fn find_all(&self) -> StoreResult<Vec<E>>;

    fn find_by_id(&self, id: i32) -> StoreResult<Option<E>>;

    fn exists_by_id(&self, id: i32) -> StoreResult<bool>;

    /// Inserts a new row and returns it with the id the store assigned.
    fn insert(&self, fields: &E::Fields) -> StoreResult<E>;

    /// Writes every non-key column of an existing row.
    fn save(&self, entity: &E) -> StoreResult<E>;

    fn delete_by_id(&self, id: i32) -> StoreResult<()>;
}
