//! HTTP request handlers for API endpoints.

pub mod health;
pub mod orders;

pub use health::health_handler;
pub use orders::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    update_order_handler,
};
