use axum::{extract::Path, response::Json};
use uuid::Uuid;

use crate::database::models::UserPublic;
use crate::error::ApiError;
use crate::services::UserService;

/// GET /api/users/:id - public projection of one user. A missing record
/// answers 200 with a JSON null body rather than a 404.
pub async fn user_get(Path(id): Path<Uuid>) -> Result<Json<Option<UserPublic>>, ApiError> {
    let service = UserService::new().await?;
    let user = service.get(id).await?;
    Ok(Json(user))
}

/// GET /api/users - all users, password and role excluded
pub async fn users_get() -> Result<Json<Vec<UserPublic>>, ApiError> {
    let service = UserService::new().await?;
    let users = service.list().await?;
    Ok(Json(users))
}
