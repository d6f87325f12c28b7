//! DTO for the health check endpoint.

use serde::Serialize;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Live orders.
    pub orders: usize,
    /// Identifiers available in total.
    pub capacity: u64,
}
