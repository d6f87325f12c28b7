//! Domain layer containing the order entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Order data structures and update semantics
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! Identifier assignment lives in [`crate::application::services::OrderService`];
//! the domain layer only knows how to hold and patch orders.

pub mod entities;
pub mod repositories;
