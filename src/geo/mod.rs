use serde::{Deserialize, Serialize};

/// A WGS84 coordinate. Axis order is fixed crate-wide as (lng, lat) = (x, y);
/// only the wire format "lat,lng" uses the reversed, human-typed order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum GeoParseError {
    #[error("expected \"lat,lng\", got \"{0}\"")]
    MalformedPair(String),
    #[error("invalid coordinate component \"{0}\"")]
    InvalidComponent(String),
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Parse a `"lat,lng"` query-string pair. Components keep their full
    /// fractional precision.
    pub fn parse_latlng(s: &str) -> Result<Self, GeoParseError> {
        let (lat_str, lng_str) = s
            .split_once(',')
            .ok_or_else(|| GeoParseError::MalformedPair(s.to_string()))?;

        let lat: f64 = lat_str
            .trim()
            .parse()
            .map_err(|_| GeoParseError::InvalidComponent(lat_str.trim().to_string()))?;
        let lng: f64 = lng_str
            .trim()
            .parse()
            .map_err(|_| GeoParseError::InvalidComponent(lng_str.trim().to_string()))?;

        Ok(Self { lng, lat })
    }
}

/// Closed exterior ring of a simple polygon, counter-clockwise winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<GeoPoint>,
}

impl Polygon {
    /// Build the axis-aligned rectangle covering the two opposite corners,
    /// whichever diagonal the caller happened to hand in. The ring is closed:
    /// the first point repeats as the last.
    pub fn bounding_box(top_right: GeoPoint, bottom_left: GeoPoint) -> Self {
        let min_lng = top_right.lng.min(bottom_left.lng);
        let max_lng = top_right.lng.max(bottom_left.lng);
        let min_lat = top_right.lat.min(bottom_left.lat);
        let max_lat = top_right.lat.max(bottom_left.lat);

        Self {
            exterior: vec![
                GeoPoint::new(min_lng, min_lat),
                GeoPoint::new(max_lng, min_lat),
                GeoPoint::new(max_lng, max_lat),
                GeoPoint::new(min_lng, max_lat),
                GeoPoint::new(min_lng, min_lat),
            ],
        }
    }

    /// Closed ring, first point == last point.
    pub fn exterior(&self) -> &[GeoPoint] {
        &self.exterior
    }

    /// Postgres `polygon` literal for the distinct corners. Postgres closes
    /// the ring implicitly, so the repeated final point is dropped.
    pub fn as_pg_literal(&self) -> String {
        let corners: Vec<String> = self.exterior[..self.exterior.len() - 1]
            .iter()
            .map(|p| format!("({},{})", p.lng, p.lat))
            .collect();
        format!("({})", corners.join(","))
    }

    /// True when the point lies inside or on the ring's bounding rectangle.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.exterior {
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }
        point.lng >= min_lng && point.lng <= max_lng && point.lat >= min_lat && point.lat <= max_lat
    }
}
