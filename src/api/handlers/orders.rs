//! Handlers for the order endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use crate::api::dto::order::{
    CreatedOrderResponse, DeletedOrderResponse, OrderResponse, parse_record,
};
use crate::domain::entities::OrderId;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::order_uri::{order_uri, request_origin};

/// Creates an order from an arbitrary JSON record.
///
/// # Endpoint
///
/// `POST /order`
///
/// # Response
///
/// **201 Created** with `Location: {scheme}://{host}/order/{id}` and
///
/// ```json
/// { "id": 4, "uri": "http://localhost:3000/order/4" }
/// ```
///
/// # Errors
///
/// - **400** if the body is missing, `null` or not JSON, or the `Host` header is invalid
/// - **503** if every identifier in the configured range is in use
pub async fn create_order_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let origin = request_origin(&headers, &state.public_host)?;
    let record = parse_record(&body)?;

    let order = state.order_service.create(record)?;
    let uri = order_uri(&origin, order.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, uri.clone())],
        Json(CreatedOrderResponse { id: order.id, uri }),
    ))
}

/// Lists every stored order.
///
/// # Endpoint
///
/// `GET /order`
///
/// # Response
///
/// ```json
/// [ { "id": 4, "order": { "item": "latte" }, "created_at": "...", "updated_at": "..." } ]
/// ```
pub async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list()?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// Returns the stored record for an order.
///
/// # Endpoint
///
/// `GET /order/{id}`
///
/// # Errors
///
/// - **400** if `id` is not a non-negative integer
/// - **404** if no order has this identifier
pub async fn get_order_handler(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let order = state.order_service.get(id)?;
    Ok(Json(order.record))
}

/// Replaces (or merges, when configured) the record of an existing order.
///
/// # Endpoint
///
/// `PUT /order/{id}`
///
/// # Response
///
/// **200 OK** with the record as stored after the update.
///
/// # Errors
///
/// - **400** if `id` is invalid or the body is missing, `null` or not JSON
/// - **404** if no order has this identifier
pub async fn update_order_handler(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let record = parse_record(&body)?;

    let order = state.order_service.update(id, record)?;
    Ok(Json(order.record))
}

/// Deletes an order.
///
/// # Endpoint
///
/// `DELETE /order/{id}`
///
/// # Errors
///
/// - **400** if `id` is invalid
/// - **404** if no order has this identifier
pub async fn delete_order_handler(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<DeletedOrderResponse>, AppError> {
    let Path(id) = path?;
    state.order_service.delete(id)?;
    Ok(Json(DeletedOrderResponse { id, deleted: true }))
}
