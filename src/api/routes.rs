//! API route configuration.

use crate::api::handlers::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    update_order_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Order routes.
///
/// # Endpoints
///
/// - `POST   /order`        - Create an order
/// - `GET    /order`        - List all orders
/// - `GET    /order/{id}`   - Fetch one order's record
/// - `PUT    /order/{id}`   - Replace or merge an order's record
/// - `DELETE /order/{id}`   - Delete an order
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/order", post(create_order_handler).get(list_orders_handler))
        .route(
            "/order/{id}",
            get(get_order_handler)
                .put(update_order_handler)
                .delete(delete_order_handler),
        )
}
