pub mod auth;
pub mod client_geo;
pub mod response;

pub use auth::{require_admin, require_user, session_context_middleware, AuthUser};
pub use client_geo::{client_geo_middleware, ClientGeo};
pub use response::Envelope;
