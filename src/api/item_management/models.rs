use crate::repository::Entity;
use crate::schema::items;
use serde::{Deserialize, Serialize};

// `name` is an integer column. Clients already depend on that, so it stays.
#[derive(Queryable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: i32,
    pub price: i32,
    pub quantity: i32,
}

/// Request body for create and update. Missing fields read as `0`; an `id` in the
/// body is ignored.
#[derive(Insertable, AsChangeset, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[table_name = "items"]
#[serde(default)]
pub struct ItemFields {
    pub name: i32,
    pub price: i32,
    pub quantity: i32,
}

impl Item {
    pub fn overwrite(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.quantity = fields.quantity;
    }
}

impl From<&Item> for ItemFields {
    fn from(item: &Item) -> Self {
        ItemFields {
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl Entity for Item {
    type Fields = ItemFields;
}
