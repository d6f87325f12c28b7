//! Order repository implementations.
//!
//! Orders live only for the lifetime of the process; there is no on-disk
//! backend.
//!
//! # Repositories
//!
//! - [`InMemoryOrderRepository`] - Concurrent map keyed by order identifier

pub mod memory_order_repository;

pub use memory_order_repository::InMemoryOrderRepository;
