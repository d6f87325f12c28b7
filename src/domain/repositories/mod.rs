//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for order storage
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod order_repository;

pub use order_repository::OrderRepository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
