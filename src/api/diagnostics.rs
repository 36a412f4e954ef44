pub(crate) mod create_user;
pub(crate) mod hello;
