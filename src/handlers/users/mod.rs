mod create;
mod delete;
mod get;
mod token;
mod update;

pub use create::user_post;
pub use delete::user_me_delete;
pub use get::{user_get, users_get};
pub use token::check_token;
pub use update::user_me_put;
