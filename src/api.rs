pub(crate) mod diagnostics;
pub(crate) mod item_management;
pub(crate) mod user_management;
