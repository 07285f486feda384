use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewUser, UserChanges, UserPublic};

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    Manager(#[from] DatabaseError),
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, UserServiceError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<UserPublic>, UserServiceError> {
        let user = sqlx::query_as::<_, UserPublic>(
            "SELECT id, user_name, email FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// All users, projected to the public shape (no password, no role)
    pub async fn list(&self) -> Result<Vec<UserPublic>, UserServiceError> {
        let users = sqlx::query_as::<_, UserPublic>(
            "SELECT id, user_name, email FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Insert a new user. The role is always 'user' here no matter what the
    /// request carried; promotion to admin is a separate administrative step.
    pub async fn create(&self, new_user: NewUser) -> Result<UserPublic, UserServiceError> {
        let user = sqlx::query_as::<_, UserPublic>(
            "INSERT INTO users (user_name, email, password, role) \
             VALUES ($1, $2, $3, 'user') RETURNING id, user_name, email",
        )
        .bind(new_user.user_name)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn update(
        &self,
        id: Uuid,
        changes: &UserChanges,
    ) -> Result<Option<UserPublic>, UserServiceError> {
        let user = sqlx::query_as::<_, UserPublic>(
            "UPDATE users SET user_name = COALESCE($2, user_name), \
             email = COALESCE($3, email), updated_at = now() \
             WHERE id = $1 RETURNING id, user_name, email",
        )
        .bind(id)
        .bind(changes.user_name.as_deref())
        .bind(changes.email.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Delete the record and hand back its public shape as confirmation
    pub async fn delete(&self, id: Uuid) -> Result<Option<UserPublic>, UserServiceError> {
        let user = sqlx::query_as::<_, UserPublic>(
            "DELETE FROM users WHERE id = $1 RETURNING id, user_name, email",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
