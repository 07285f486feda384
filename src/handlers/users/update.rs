use axum::{Extension, Json};
use serde::Deserialize;
use validator::Validate;

use crate::database::models::{UserChanges, UserPublic};
use crate::error::ApiError;
use crate::middleware::{require_user, AuthUser, Envelope};
use crate::services::UserService;
use crate::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub user_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

/// PUT /api/users/me - partial update of the caller's own record
pub async fn user_me_put(
    user: Option<Extension<AuthUser>>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Envelope<UserPublic>, ApiError> {
    validate::check(&body)?;
    let user = require_user(user)?;

    let changes = UserChanges {
        user_name: body.user_name,
        email: body.email,
    };

    let service = UserService::new().await?;
    service
        .update(user.id, &changes)
        .await?
        .map(|updated| Envelope::ok("User updated", updated))
        .ok_or_else(|| ApiError::not_found("User not found"))
}
