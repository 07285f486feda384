use axum::{extract::Path, response::Json};
use uuid::Uuid;

use crate::database::models::CatWithOwner;
use crate::error::ApiError;
use crate::services::CatService;

/// GET /api/cats/:id - one cat with its owner projected to {user_name, email}
pub async fn cat_get(Path(id): Path<Uuid>) -> Result<Json<CatWithOwner>, ApiError> {
    let service = CatService::new().await?;
    service
        .get_with_owner(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Cat not found"))
}
