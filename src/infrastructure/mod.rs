//! Infrastructure layer implementing the domain storage contract.
//!
//! # Modules
//!
//! - [`persistence`] - Order repository implementations

pub mod persistence;
