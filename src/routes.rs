//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Static welcome message
//! - `GET  /health`   - Health check: database connectivity
//! - `/links/...`     - Link CRUD resource
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - All origins, methods, and headers permitted on every route
//!
//! There is no trailing-slash normalization: the collection routes are
//! registered at `/links/` exactly.

use crate::api;
use crate::api::handlers::{health_handler, welcome_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors)
}
