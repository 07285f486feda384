pub mod cat_service;
pub mod user_service;

pub use cat_service::CatService;
pub use user_service::UserService;
