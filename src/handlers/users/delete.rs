use axum::Extension;

use crate::database::models::UserPublic;
use crate::error::ApiError;
use crate::middleware::{require_user, AuthUser, Envelope};
use crate::services::UserService;

/// DELETE /api/users/me - remove the caller's own record, answering with its
/// public shape as confirmation
pub async fn user_me_delete(
    user: Option<Extension<AuthUser>>,
) -> Result<Envelope<UserPublic>, ApiError> {
    let user = require_user(user)?;

    let service = UserService::new().await?;
    service
        .delete(user.id)
        .await?
        .map(|removed| Envelope::ok("User deleted", removed))
        .ok_or_else(|| ApiError::not_found("User not found"))
}
