//! Order creation, lookup and lifecycle service.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::domain::entities::{Order, OrderId, OrderPatch, UpdateMode};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use crate::utils::id_generator::{IdRange, generate_id};

/// Random candidates tried before falling back to a sequential scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 16;

/// Service owning identifier assignment for orders.
///
/// Guarantees that every live order has a distinct identifier inside the
/// configured [`IdRange`]. Records are opaque: only `null` is rejected.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
    id_range: IdRange,
    update_mode: UpdateMode,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service.
    pub fn new(repository: Arc<R>, id_range: IdRange, update_mode: UpdateMode) -> Self {
        Self {
            repository,
            id_range,
            update_mode,
        }
    }

    /// Stores a new order under a fresh identifier.
    ///
    /// # Identifier Assignment
    ///
    /// - Draws up to [`MAX_RANDOM_ATTEMPTS`] random candidates from the range
    /// - On repeated collisions, scans the whole range from a random offset
    /// - Every candidate is claimed with an atomic insert-if-absent
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `record` is `null`.
    ///
    /// Returns [`AppError::Exhausted`] if every identifier in the range is
    /// held by a live order.
    pub fn create(&self, record: Value) -> Result<Order, AppError> {
        ensure_present(&record)?;

        let mut order = Order::new(generate_id(&self.id_range), record);

        for attempt in 1..=MAX_RANDOM_ATTEMPTS {
            if self.repository.insert_if_absent(order.clone())? {
                info!(order_id = order.id, attempt, "Order created");
                return Ok(order);
            }
            debug!(order_id = order.id, attempt, "Order id collision");
            order.id = generate_id(&self.id_range);
        }

        for id in self.id_range.scan_from(generate_id(&self.id_range)) {
            order.id = id;
            if self.repository.insert_if_absent(order.clone())? {
                info!(order_id = id, "Order created after sequential scan");
                return Ok(order);
            }
        }

        warn!(
            capacity = self.id_range.capacity(),
            "Order identifier space exhausted"
        );
        Err(AppError::exhausted(
            "Order identifier space exhausted",
            json!({
                "min": self.id_range.min(),
                "max": self.id_range.max(),
                "capacity": self.id_range.capacity(),
            }),
        ))
    }

    /// Retrieves an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this identifier.
    pub fn get(&self, id: OrderId) -> Result<Order, AppError> {
        self.repository
            .find(id)?
            .ok_or_else(|| order_not_found(id))
    }

    /// Returns all stored orders in no particular order.
    pub fn list(&self) -> Result<Vec<Order>, AppError> {
        self.repository.list()
    }

    /// Replaces or merges the content of an existing order, depending on the
    /// configured [`UpdateMode`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `record` is `null`.
    ///
    /// Returns [`AppError::NotFound`] if no order has this identifier; the
    /// store is left unchanged.
    pub fn update(&self, id: OrderId, record: Value) -> Result<Order, AppError> {
        ensure_present(&record)?;

        let patch = OrderPatch {
            record,
            mode: self.update_mode,
        };

        let order = self
            .repository
            .update(id, patch)?
            .ok_or_else(|| order_not_found(id))?;

        info!(order_id = id, mode = %self.update_mode, "Order updated");
        Ok(order)
    }

    /// Removes an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this identifier.
    pub fn delete(&self, id: OrderId) -> Result<(), AppError> {
        if !self.repository.remove(id)? {
            return Err(order_not_found(id));
        }

        info!(order_id = id, "Order deleted");
        Ok(())
    }

    /// Number of live orders.
    pub fn len(&self) -> Result<usize, AppError> {
        self.repository.count()
    }

    /// Whether no order is currently stored.
    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }

    /// Maximum number of orders that can be live at once.
    pub fn capacity(&self) -> u64 {
        self.id_range.capacity()
    }
}

fn ensure_present(record: &Value) -> Result<(), AppError> {
    if record.is_null() {
        return Err(AppError::bad_request(
            "Order record is required",
            json!({ "field": "body" }),
        ));
    }
    Ok(())
}

fn order_not_found(id: OrderId) -> AppError {
    AppError::not_found("Order not found", json!({ "id": id }))
}
