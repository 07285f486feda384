use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::database::models::{Cat, CatChanges};
use crate::error::ApiError;
use crate::middleware::{require_admin, require_user, AuthUser, Envelope};
use crate::services::CatService;
use crate::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCatRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Breed cannot be empty"))]
    pub breed: Option<String>,
}

impl From<UpdateCatRequest> for CatChanges {
    fn from(body: UpdateCatRequest) -> Self {
        Self {
            name: body.name,
            breed: body.breed,
        }
    }
}

/// PUT /api/cats/:id - partial update of the caller's own cat
pub async fn cat_put(
    Path(id): Path<Uuid>,
    user: Option<Extension<AuthUser>>,
    Json(body): Json<UpdateCatRequest>,
) -> Result<Envelope<Cat>, ApiError> {
    validate::check(&body)?;
    let user = require_user(user)?;

    let service = CatService::new().await?;
    service
        .update_owned(id, user.id, &body.into())
        .await?
        .map(|cat| Envelope::ok("Cat updated", cat))
        .ok_or_else(|| ApiError::not_found("Cat not found"))
}

/// PUT /api/admin/cats/:id - partial update of any cat; admin role required
pub async fn admin_cat_put(
    Path(id): Path<Uuid>,
    user: Option<Extension<AuthUser>>,
    Json(body): Json<UpdateCatRequest>,
) -> Result<Envelope<Cat>, ApiError> {
    validate::check(&body)?;
    let user = require_user(user)?;
    require_admin(&user)?;

    let service = CatService::new().await?;
    service
        .update(id, &body.into())
        .await?
        .map(|cat| Envelope::ok("Cat updated", cat))
        .ok_or_else(|| ApiError::not_found("Cat not found"))
}
