use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::item_management::models::{Item, ItemFields};
use crate::api::user_management::models::{NewUser, User};
use crate::db::Store;
use crate::error::{StoreError, StoreResult};
use crate::repository::{Entity, Repository};

pub(crate) trait Row: Entity {
    fn id(&self) -> i32;
    fn from_fields(id: i32, fields: Self::Fields) -> Self;
}

impl Row for Item {
    fn id(&self) -> i32 {
        self.id
    }

    fn from_fields(id: i32, fields: ItemFields) -> Self {
        Item {
            id,
            name: fields.name,
            price: fields.price,
            quantity: fields.quantity,
        }
    }
}

impl Row for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn from_fields(id: i32, fields: NewUser) -> Self {
        User {
            id,
            username: fields.username,
            email: fields.email,
            password: fields.password,
            first_name: fields.first_name,
            last_name: fields.last_name,
        }
    }
}

struct Table<E> {
    rows: BTreeMap<i32, E>,
    last_id: i32,
}

/// Table kept in a map, with ids handed out like a `SERIAL` column.
pub(crate) struct MemoryRepository<E> {
    table: Mutex<Table<E>>,
}

impl<E> MemoryRepository<E> {
    pub(crate) fn new() -> Self {
        MemoryRepository {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table<E>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Row> Repository<E> for MemoryRepository<E> {
    fn find_all(&self) -> StoreResult<Vec<E>> {
        Ok(self.table().rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: i32) -> StoreResult<Option<E>> {
        Ok(self.table().rows.get(&id).cloned())
    }

    fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        Ok(self.table().rows.contains_key(&id))
    }

    fn insert(&self, fields: &E::Fields) -> StoreResult<E> {
        let mut table = self.table();
        table.last_id += 1;
        let row = E::from_fields(table.last_id, fields.clone());
        table.rows.insert(row.id(), row.clone());
        Ok(row)
    }

    fn save(&self, entity: &E) -> StoreResult<E> {
        // Same contract as an UPDATE .. RETURNING on a missing row.
        match self.table().rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(StoreError::Query(diesel::result::Error::NotFound)),
        }
    }

    fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        self.table().rows.remove(&id);
        Ok(())
    }
}

impl Store {
    pub(crate) fn in_memory() -> Store {
        Store {
            items: Arc::new(MemoryRepository::<Item>::new()),
            users: Arc::new(MemoryRepository::<User>::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: i32) -> ItemFields {
        ItemFields {
            name,
            price: 100,
            quantity: 1,
        }
    }

    #[test]
    fn ids_are_never_reused() {
        let repo = MemoryRepository::<Item>::new();
        let first = repo.insert(&fields(1)).unwrap();
        repo.delete_by_id(first.id).unwrap();
        let second = repo.insert(&fields(2)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!repo.exists_by_id(1).unwrap());
    }

    #[test]
    fn find_all_is_ordered_by_id() {
        let repo = MemoryRepository::<Item>::new();
        for name in [30, 10, 20] {
            repo.insert(&fields(name)).unwrap();
        }

        let names = repo
            .find_all()
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec![30, 10, 20]);
    }

    #[test]
    fn save_overwrites_the_row() {
        let repo = MemoryRepository::<Item>::new();
        let mut item = repo.insert(&fields(1)).unwrap();
        item.overwrite(fields(9));

        repo.save(&item).unwrap();

        assert_eq!(repo.find_by_id(item.id).unwrap(), Some(item));
    }

    #[test]
    fn save_of_a_missing_row_fails() {
        let repo = MemoryRepository::<Item>::new();
        let item = Item::from_fields(5, fields(1));

        assert!(matches!(
            repo.save(&item),
            Err(StoreError::Query(diesel::result::Error::NotFound))
        ));
        assert!(repo.find_all().unwrap().is_empty());
    }
}
