//! Core domain entities.
//!
//! - [`Order`] - A stored order record with its identifier
//! - [`OrderPatch`] - Incoming content for an existing order
//! - [`UpdateMode`] - Whether updates replace or merge stored content

pub mod order;

pub use order::{Order, OrderId, OrderPatch, UpdateMode};
