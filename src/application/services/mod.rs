//! Business logic services for the application layer.

pub mod order_service;

pub use order_service::OrderService;
