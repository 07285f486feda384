use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::geo::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub filename: String,
    pub owner: Uuid,
    #[sqlx(flatten)]
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner projection attached to cat reads. Deliberately excludes the
/// password hash and role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnerInfo {
    pub user_name: String,
    pub email: String,
}

/// Cat record with the owner reference resolved via join
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatWithOwner {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub filename: String,
    #[sqlx(flatten)]
    pub location: GeoPoint,
    #[sqlx(flatten)]
    pub owner: OwnerInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. `owner`, `location` and `filename` are server-assigned;
/// only `name` and `breed` come from the request body.
#[derive(Debug, Clone)]
pub struct NewCat {
    pub name: String,
    pub breed: String,
    pub filename: String,
    pub owner: Uuid,
    pub location: GeoPoint,
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct CatChanges {
    pub name: Option<String>,
    pub breed: Option<String>,
}
