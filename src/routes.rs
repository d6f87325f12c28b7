//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/order`, `/order/{id}` - Order API
//! - `GET /health`           - Store occupancy
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing as request_tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with state and tracing attached.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::order_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(request_tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`api_router`] so that `/order/` and `/order` resolve to the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
