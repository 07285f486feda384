use axum::{response::Json, Extension};

use crate::database::models::UserPublic;
use crate::error::ApiError;
use crate::middleware::{require_user, AuthUser};

/// GET /api/users/token - confirm the session token is valid by echoing the
/// caller identity straight from the session context. No database access.
pub async fn check_token(user: Option<Extension<AuthUser>>) -> Result<Json<UserPublic>, ApiError> {
    let user = require_user(user)?;

    Ok(Json(UserPublic {
        id: user.id,
        user_name: user.user_name,
        email: user.email,
    }))
}
