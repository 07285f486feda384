use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The only user shape that ever crosses the response boundary: the stored
/// password hash and role never leave the database layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPublic {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

/// Insert payload. The password is already hashed by the time it reaches the
/// service; role is forced to 'user' at the SQL level.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub user_name: Option<String>,
    pub email: Option<String>,
}
