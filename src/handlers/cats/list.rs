use axum::{response::Json, Extension};

use crate::database::models::{Cat, CatWithOwner};
use crate::error::ApiError;
use crate::middleware::{require_user, AuthUser};
use crate::services::CatService;

/// GET /api/cats - list every cat with its owner resolved
pub async fn cats_get() -> Result<Json<Vec<CatWithOwner>>, ApiError> {
    let service = CatService::new().await?;
    let cats = service.list_all_with_owner().await?;
    Ok(Json(cats))
}

/// GET /api/cats/mine - list the caller's own cats. An empty list is a
/// normal result, not an error.
pub async fn cats_mine_get(user: Option<Extension<AuthUser>>) -> Result<Json<Vec<Cat>>, ApiError> {
    let user = require_user(user)?;
    let service = CatService::new().await?;
    let cats = service.list_by_owner(user.id).await?;
    Ok(Json(cats))
}
