//! DTOs for the order endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::{Order, OrderId};
use crate::error::AppError;

/// Response body for `POST /order`.
#[derive(Debug, Serialize)]
pub struct CreatedOrderResponse {
    pub id: OrderId,
    pub uri: String,
}

/// One entry of the `GET /order` listing.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub order: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order: order.record,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Response body for `DELETE /order/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedOrderResponse {
    pub id: OrderId,
    pub deleted: bool,
}

/// Decodes a request body into an order record.
///
/// An empty (or whitespace-only) body decodes to `null`, which the service
/// rejects as a missing record.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is not valid JSON.
pub fn parse_record(body: &[u8]) -> Result<Value, AppError> {
    if body.trim_ascii().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| {
        AppError::bad_request("Malformed JSON body", json!({ "reason": e.to_string() }))
    })
}
