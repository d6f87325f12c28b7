//! Repository trait for order storage.

use crate::domain::entities::{Order, OrderId, OrderPatch};
use crate::error::AppError;

/// Storage contract for orders keyed by identifier.
///
/// Operations are synchronous: the only implementation is an in-memory map.
/// They still return `Result` so a fallible backend can slot in behind the
/// same trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryOrderRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    /// Stores `order` unless its identifier is already taken.
    ///
    /// The check and the insert happen atomically, so two callers can never
    /// both claim the same identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the order was stored
    /// - `Ok(false)` if the identifier is in use; nothing is changed
    fn insert_if_absent(&self, order: Order) -> Result<bool, AppError>;

    /// Finds an order by identifier.
    fn find(&self, id: OrderId) -> Result<Option<Order>, AppError>;

    /// Returns every stored order in no particular order.
    fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Applies `patch` to an existing order and returns the result.
    ///
    /// Returns `Ok(None)` if no order has this identifier.
    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<Option<Order>, AppError>;

    /// Removes an order.
    ///
    /// Returns `Ok(true)` if an order was removed, `Ok(false)` if none existed.
    fn remove(&self, id: OrderId) -> Result<bool, AppError>;

    /// Counts stored orders.
    fn count(&self) -> Result<usize, AppError>;
}
