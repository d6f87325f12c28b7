//! # Restbucks Orders
//!
//! A small orders REST service in the Restbucks tutorial style, built with Axum.
//! Orders are arbitrary JSON records held in memory under randomly assigned
//! integer identifiers.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Order entity and repository trait
//! - **Application Layer** ([`application`]) - Identifier assignment and order lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `POST` | `/order` | 201 with `Location` |
//! | `GET` | `/order` | 200, all orders |
//! | `GET` | `/order/{id}` | 200, the record |
//! | `PUT` | `/order/{id}` | 200, the updated record |
//! | `DELETE` | `/order/{id}` | 200 |
//! | `GET` | `/health` | 200 |
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=3000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::OrderService;
    pub use crate::domain::entities::{Order, OrderId, UpdateMode};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryOrderRepository;
    pub use crate::state::AppState;
    pub use crate::utils::id_generator::IdRange;
}
