table! {
    items (id) {
        id -> Int4,
        name -> Int4,
        price -> Int4,
        quantity -> Int4,
    }
}

table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        password -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(items, users);
