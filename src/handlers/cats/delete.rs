use axum::{extract::Path, Extension};
use uuid::Uuid;

use crate::database::models::{Cat, CatWithOwner};
use crate::error::ApiError;
use crate::middleware::{require_admin, require_user, AuthUser, Envelope};
use crate::services::CatService;

/// DELETE /api/cats/:id - remove the caller's own cat
pub async fn cat_delete(
    Path(id): Path<Uuid>,
    user: Option<Extension<AuthUser>>,
) -> Result<Envelope<Cat>, ApiError> {
    let user = require_user(user)?;

    let service = CatService::new().await?;
    service
        .delete_owned(id, user.id)
        .await?
        .map(|cat| Envelope::ok("Cat deleted", cat))
        .ok_or_else(|| ApiError::not_found("No cat found"))
}

/// DELETE /api/admin/cats/:id - remove any cat, returning it with its owner
/// resolved; admin role required
pub async fn admin_cat_delete(
    Path(id): Path<Uuid>,
    user: Option<Extension<AuthUser>>,
) -> Result<Envelope<CatWithOwner>, ApiError> {
    let user = require_user(user)?;
    require_admin(&user)?;

    let service = CatService::new().await?;
    service
        .delete_with_owner(id)
        .await?
        .map(|cat| Envelope::ok("Cat deleted", cat))
        .ok_or_else(|| ApiError::not_found("Cat not found"))
}
