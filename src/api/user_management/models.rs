use crate::repository::Entity;
use crate::schema::users;

// Passwords are stored as given; nothing hashes them.
#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone, PartialEq, Eq)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for NewUser {
    fn from(user: &User) -> Self {
        NewUser {
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl Entity for User {
    type Fields = NewUser;
}
