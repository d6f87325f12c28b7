//! Helper functions used by the service and the HTTP layer.
//!
//! - [`id_generator`] - Random order identifiers within a bounded range
//! - [`order_uri`] - Absolute order URIs built from request headers

pub mod id_generator;
pub mod order_uri;
