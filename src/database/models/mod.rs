pub mod cat;
pub mod user;

pub use cat::{Cat, CatChanges, CatWithOwner, NewCat, OwnerInfo};
pub use user::{NewUser, UserChanges, UserPublic};
