use axum::{extract::Request, middleware::Next, response::Response};

use crate::geo::GeoPoint;

/// Server-derived coordinate pair for the requesting client, resolved by
/// edge infrastructure and forwarded as an `X-Client-Geo: "lat,lng"` header.
#[derive(Clone, Copy, Debug)]
pub struct ClientGeo(pub GeoPoint);

pub const CLIENT_GEO_HEADER: &str = "x-client-geo";

/// Injects the client coordinate as a request extension when the header is
/// present and parseable. Handlers that need it treat absence as a 400.
pub async fn client_geo_middleware(mut request: Request, next: Next) -> Response {
    let parsed = request
        .headers()
        .get(CLIENT_GEO_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(GeoPoint::parse_latlng);

    match parsed {
        Some(Ok(point)) => {
            request.extensions_mut().insert(ClientGeo(point));
        }
        Some(Err(e)) => tracing::debug!("ignoring unparseable {} header: {}", CLIENT_GEO_HEADER, e),
        None => {}
    }

    next.run(request).await
}
