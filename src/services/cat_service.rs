use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Cat, CatChanges, CatWithOwner, NewCat};
use crate::geo::Polygon;

#[derive(Debug, thiserror::Error)]
pub enum CatServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    Manager(#[from] DatabaseError),
}

const CAT_COLUMNS: &str = "id, name, breed, filename, owner, lng, lat, created_at, updated_at";

/// One database call per operation; concurrent writes to the same record are
/// last-write-wins.
pub struct CatService {
    pool: PgPool,
}

impl CatService {
    pub async fn new() -> Result<Self, CatServiceError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// All cats belonging to one owner. An empty list is a normal result.
    pub async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Cat>, CatServiceError> {
        let sql = format!("SELECT {CAT_COLUMNS} FROM cats WHERE owner = $1 ORDER BY created_at");
        let cats = sqlx::query_as::<_, Cat>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(cats)
    }

    /// Cats whose location falls within the given polygon
    pub async fn list_in_area(&self, area: &Polygon) -> Result<Vec<Cat>, CatServiceError> {
        let sql = format!(
            "SELECT {CAT_COLUMNS} FROM cats WHERE point(lng, lat) <@ $1::polygon ORDER BY created_at"
        );
        let cats = sqlx::query_as::<_, Cat>(&sql)
            .bind(area.as_pg_literal())
            .fetch_all(&self.pool)
            .await?;
        Ok(cats)
    }

    pub async fn get_with_owner(&self, id: Uuid) -> Result<Option<CatWithOwner>, CatServiceError> {
        let cat = sqlx::query_as::<_, CatWithOwner>(
            "SELECT c.id, c.name, c.breed, c.filename, c.lng, c.lat, \
                    u.user_name, u.email, c.created_at, c.updated_at \
             FROM cats c JOIN users u ON u.id = c.owner \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cat)
    }

    pub async fn list_all_with_owner(&self) -> Result<Vec<CatWithOwner>, CatServiceError> {
        let cats = sqlx::query_as::<_, CatWithOwner>(
            "SELECT c.id, c.name, c.breed, c.filename, c.lng, c.lat, \
                    u.user_name, u.email, c.created_at, c.updated_at \
             FROM cats c JOIN users u ON u.id = c.owner \
             ORDER BY c.created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cats)
    }

    pub async fn create(&self, new_cat: NewCat) -> Result<Cat, CatServiceError> {
        let sql = format!(
            "INSERT INTO cats (name, breed, filename, owner, lng, lat) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {CAT_COLUMNS}"
        );
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(new_cat.name)
            .bind(new_cat.breed)
            .bind(new_cat.filename)
            .bind(new_cat.owner)
            .bind(new_cat.location.lng)
            .bind(new_cat.location.lat)
            .fetch_one(&self.pool)
            .await?;
        Ok(cat)
    }

    /// Partial update scoped to the record's owner; a non-owner caller sees
    /// the same None as a missing record.
    pub async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, CatServiceError> {
        let sql = format!(
            "UPDATE cats SET name = COALESCE($3, name), breed = COALESCE($4, breed), \
             updated_at = now() WHERE id = $1 AND owner = $2 RETURNING {CAT_COLUMNS}"
        );
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .bind(owner)
            .bind(changes.name.as_deref())
            .bind(changes.breed.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(cat)
    }

    /// Partial update without an ownership constraint (admin path)
    pub async fn update(&self, id: Uuid, changes: &CatChanges) -> Result<Option<Cat>, CatServiceError> {
        let sql = format!(
            "UPDATE cats SET name = COALESCE($2, name), breed = COALESCE($3, breed), \
             updated_at = now() WHERE id = $1 RETURNING {CAT_COLUMNS}"
        );
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.breed.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(cat)
    }

    pub async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Cat>, CatServiceError> {
        let sql = format!(
            "DELETE FROM cats WHERE id = $1 AND owner = $2 RETURNING {CAT_COLUMNS}"
        );
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cat)
    }

    /// Admin delete, returning the removed record with its owner resolved
    pub async fn delete_with_owner(&self, id: Uuid) -> Result<Option<CatWithOwner>, CatServiceError> {
        let cat = sqlx::query_as::<_, CatWithOwner>(
            "WITH removed AS (DELETE FROM cats WHERE id = $1 RETURNING *) \
             SELECT r.id, r.name, r.breed, r.filename, r.lng, r.lat, \
                    u.user_name, u.email, r.created_at, r.updated_at \
             FROM removed r JOIN users u ON u.id = r.owner",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cat)
    }
}
