pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

#[cfg(test)]
pub mod testing;

use axum::http::{header, HeaderValue, Method, Uri};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(idea_routes(state.clone()))
        .fallback(not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/refresh", post(auth::refresh))
}

fn idea_routes(state: AppState) -> Router<AppState> {
    use handlers::ideas;

    // Reads are public; every mutation goes through the auth guard
    let protected = Router::new()
        .route("/api/ideas", post(ideas::create))
        .route("/api/ideas/:id", put(ideas::update).delete(ideas::delete))
        .route_layer(from_fn_with_state(state, middleware::require_auth));

    Router::new()
        .route("/api/ideas", get(ideas::list))
        .route("/api/ideas/:id", get(ideas::show))
        .merge(protected)
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials must be allowed for the refresh cookie to travel
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "IdeaDrop API",
        "version": version,
        "endpoints": {
            "auth": "/api/auth/register, /api/auth/login, /api/auth/logout, /api/auth/refresh",
            "ideas": "/api/ideas[/:id] (GET public; POST/PUT/DELETE require a bearer token)",
            "health": "/health",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Not Found - {uri}"))
}
