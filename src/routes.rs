use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{client_geo_middleware, session_context_middleware};

pub fn app() -> Router {
    let config = crate::config::config();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(cat_routes())
        .merge(user_routes())
        // Global middleware
        .layer(axum::extract::DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(axum::middleware::from_fn(session_context_middleware))
        .layer(axum::middleware::from_fn(client_geo_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn cat_routes() -> Router {
    use crate::handlers::cats;
    use axum::routing::put;

    Router::new()
        // Collection-level reads and creation
        .route("/api/cats", get(cats::cats_get).post(cats::cats_post))
        .route("/api/cats/mine", get(cats::cats_mine_get))
        .route("/api/cats/area", get(cats::cats_area_get))
        // Record-level operations, owner-scoped
        .route(
            "/api/cats/:id",
            get(cats::cat_get).put(cats::cat_put).delete(cats::cat_delete),
        )
        // Admin operations
        .route(
            "/api/admin/cats/:id",
            put(cats::admin_cat_put).delete(cats::admin_cat_delete),
        )
}

fn user_routes() -> Router {
    use crate::handlers::users;
    use axum::routing::put;

    Router::new()
        .route("/api/users", get(users::users_get).post(users::user_post))
        // Static segments before the :id match
        .route("/api/users/token", get(users::check_token))
        .route(
            "/api/users/me",
            put(users::user_me_put).delete(users::user_me_delete),
        )
        .route("/api/users/:id", get(users::user_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "catmap API",
        "version": version,
        "description": "REST API for cataloguing cats and their last-seen locations",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "cats": "/api/cats[/:id], /api/cats/mine, /api/cats/area?topRight=lat,lng&bottomLeft=lat,lng",
            "admin": "/api/admin/cats/:id (admin role required)",
            "users": "/api/users[/:id], /api/users/me, /api/users/token",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
