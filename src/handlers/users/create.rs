use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::config;
use crate::database::models::{NewUser, UserPublic};
use crate::error::ApiError;
use crate::middleware::Envelope;
use crate::services::UserService;
use crate::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Accepted but ignored: clients cannot choose their own role
    #[serde(default)]
    pub role: Option<String>,
}

/// POST /api/users - self-registration. The password is hashed before it
/// goes anywhere near the database, and the role is always 'user'.
pub async fn user_post(Json(body): Json<CreateUserRequest>) -> Result<Envelope<UserPublic>, ApiError> {
    validate::check(&body)?;

    let cost = config::config().security.bcrypt_cost;
    let password = body.password;
    let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!("password hashing task failed: {}", e);
            ApiError::internal("Failed to process password")
        })?
        .map_err(|e| {
            tracing::error!("bcrypt failure: {}", e);
            ApiError::internal("Failed to process password")
        })?;

    let service = UserService::new().await?;
    let user = service
        .create(NewUser {
            user_name: body.user_name,
            email: body.email,
            password_hash,
        })
        .await?;

    Ok(Envelope::created("User created", user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_differs_from_plaintext_and_verifies() {
        // Low cost keeps the test fast; the property holds at any cost
        let hash = bcrypt::hash("correct horse battery", 4).unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(bcrypt::verify("correct horse battery", &hash).unwrap());
        assert!(!bcrypt::verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn client_supplied_role_is_carried_but_never_used() {
        let body: CreateUserRequest = serde_json::from_str(
            r#"{"user_name":"felix","email":"felix@example.com","password":"s3cret-enough","role":"admin"}"#,
        )
        .unwrap();
        assert!(validate::check(&body).is_ok());
        // NewUser has no role field at all; insertion hardcodes 'user'
        let new_user = NewUser {
            user_name: body.user_name,
            email: body.email,
            password_hash: "hash".to_string(),
        };
        assert_eq!(new_user.user_name, "felix");
    }

    #[test]
    fn weak_password_is_rejected_with_joined_message() {
        let body = CreateUserRequest {
            user_name: "felix".to_string(),
            email: "felix@example.com".to_string(),
            password: "short".to_string(),
            role: None,
        };
        let err = validate::check(&body).unwrap_err();
        assert_eq!(err.message(), "Password must be at least 8 characters: password");
    }
}
