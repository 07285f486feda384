use axum::{body::Bytes, extract::Multipart, Extension};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::config;
use crate::database::models::{Cat, NewCat};
use crate::error::ApiError;
use crate::middleware::{require_user, AuthUser, ClientGeo, Envelope};
use crate::services::CatService;
use crate::validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Breed is required"))]
    pub breed: String,
}

/// POST /api/cats - create a cat from multipart form data.
///
/// `name` and `breed` come from the body; `owner` is the caller, `location`
/// is the server-derived client coordinate and `filename` is the stored name
/// of the uploaded `photo` field. None of the three can be set by the client.
pub async fn cats_post(
    user: Option<Extension<AuthUser>>,
    geo: Option<Extension<ClientGeo>>,
    mut multipart: Multipart,
) -> Result<Envelope<Cat>, ApiError> {
    let user = require_user(user)?;

    let mut name = String::new();
    let mut breed = String::new();
    let mut photo: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => name = field.text().await.map_err(multipart_err)?,
            Some("breed") => breed = field.text().await.map_err(multipart_err)?,
            Some("photo") => {
                let original = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(multipart_err)?;
                photo = Some((original, bytes));
            }
            _ => {}
        }
    }

    let body = CreateCatRequest { name, breed };
    validate::check(&body)?;

    let (original, bytes) = photo.ok_or_else(|| ApiError::bad_request("No file attached"))?;

    let Extension(ClientGeo(location)) =
        geo.ok_or_else(|| ApiError::bad_request("Client location unavailable"))?;

    let filename = store_photo(&original, &bytes).await?;

    let service = CatService::new().await?;
    let created = service
        .create(NewCat {
            name: body.name,
            breed: body.breed,
            filename: filename.clone(),
            owner: user.id,
            location,
        })
        .await;

    let cat = match created {
        Ok(cat) => cat,
        Err(e) => {
            // The photo went to disk before the insert; don't orphan it
            remove_photo(&filename).await;
            return Err(e.into());
        }
    };

    Ok(Envelope::created("Cat created", cat))
}

/// Write the upload under a fresh UUID name, keeping the original extension
async fn store_photo(original: &str, bytes: &[u8]) -> Result<String, ApiError> {
    let ext = std::path::Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    let stored = format!("{}{}", Uuid::new_v4(), ext);

    let dir = std::path::PathBuf::from(&config::config().storage.upload_dir);
    tokio::fs::create_dir_all(&dir).await.map_err(storage_err)?;
    tokio::fs::write(dir.join(&stored), bytes)
        .await
        .map_err(storage_err)?;

    Ok(stored)
}

/// Best-effort removal of a stored upload whose record never made it in
async fn remove_photo(filename: &str) {
    let path = std::path::PathBuf::from(&config::config().storage.upload_dir).join(filename);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::debug!("failed to remove stored upload {}: {}", path.display(), e);
    }
}

fn multipart_err(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::bad_request(format!("malformed multipart body: {}", e))
}

fn storage_err(e: std::io::Error) -> ApiError {
    tracing::error!("failed to store uploaded photo: {}", e);
    ApiError::internal("Failed to store uploaded file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fail_validation() {
        let body = CreateCatRequest {
            name: String::new(),
            breed: "tabby".to_string(),
        };
        let err = validate::check(&body).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Name is required: name");
    }
}
