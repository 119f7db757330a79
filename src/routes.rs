//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Front-end entry point (fixed HTML document)
//! - `GET  /public/*`              - Static assets (404 if missing)
//! - `GET  /api/hello`             - Diagnostic greeting
//! - `POST /api/shorturl/new`      - Create a short URL
//! - `GET  /api/shorturl/{short}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy for the API

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route_service("/", ServeFile::new("views/index.html"))
        .nest_service("/public", ServeDir::new("public"))
        .route("/api/hello", get(hello_handler))
        .route("/api/shorturl/new", post(shorten_handler))
        .route("/api/shorturl/{short}", get(redirect_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
