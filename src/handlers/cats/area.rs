use axum::{extract::Query, response::Json};
use serde::Deserialize;

use crate::database::models::Cat;
use crate::error::ApiError;
use crate::geo::{GeoPoint, Polygon};
use crate::services::CatService;

#[derive(Debug, Deserialize)]
pub struct AreaQuery {
    #[serde(rename = "topRight")]
    pub top_right: Option<String>,
    #[serde(rename = "bottomLeft")]
    pub bottom_left: Option<String>,
}

/// GET /api/cats/area?topRight=lat,lng&bottomLeft=lat,lng - cats whose
/// location falls within the rectangle spanned by the two corners
pub async fn cats_area_get(Query(query): Query<AreaQuery>) -> Result<Json<Vec<Cat>>, ApiError> {
    let (Some(tr), Some(bl)) = (query.top_right.as_deref(), query.bottom_left.as_deref()) else {
        let mut missing = Vec::new();
        if query.top_right.is_none() {
            missing.push("Required: topRight");
        }
        if query.bottom_left.is_none() {
            missing.push("Required: bottomLeft");
        }
        return Err(ApiError::validation(missing.join(", ")));
    };

    let top_right = GeoPoint::parse_latlng(tr).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let bottom_left = GeoPoint::parse_latlng(bl).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let area = Polygon::bounding_box(top_right, bottom_left);

    let service = CatService::new().await?;
    let cats = service.list_in_area(&area).await?;
    Ok(Json(cats))
}
