//! Application routing
//!
//! This module defines all HTTP routes: the relay API, the health check,
//! and the static form/results pages.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{health, places};
use crate::middleware::logging::log_request;
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.settings.static_dir.clone();

    // Relay API routes
    let api_routes = Router::new().route(
        "/places",
        post(places::relay_places).get(places::greeting),
    );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health_check))
        // Front-end pages; query parameters on /places are read client-side
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/places", ServeFile::new(static_dir.join("places.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(create_cors_layer())
        // Custom request logging with trace IDs
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Create CORS layer with permissive settings for development
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
