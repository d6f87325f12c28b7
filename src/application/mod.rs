//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::order_service::OrderService`] - Identifier assignment and order lifecycle

pub mod services;
