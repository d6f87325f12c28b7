//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health and store occupancy.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store could not report its size
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "orders": 3, "capacity": 10 }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let capacity = state.order_service.capacity();
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.order_service.len() {
        Ok(orders) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            version,
            orders,
            capacity,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed to count orders");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version,
                    orders: 0,
                    capacity,
                }),
            ))
        }
    }
}
