mod area;
mod create;
mod delete;
mod get;
mod list;
mod update;

pub use area::cats_area_get;
pub use create::cats_post;
pub use delete::{admin_cat_delete, cat_delete};
pub use get::cat_get;
pub use list::{cats_get, cats_mine_get};
pub use update::{admin_cat_put, cat_put};
