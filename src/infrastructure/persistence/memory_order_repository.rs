//! In-memory implementation of the order repository.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::{Order, OrderId, OrderPatch};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// Process-local order storage backed by a [`DashMap`].
///
/// Every operation locks at most one shard, so handlers never block each
/// other for longer than a single map access. Contents vanish on restart.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: DashMap<OrderId, Order>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory order storage");
        Self {
            orders: DashMap::new(),
        }
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn insert_if_absent(&self, order: Order) -> Result<bool, AppError> {
        match self.orders.entry(order.id) {
            Entry::Vacant(slot) => {
                slot.insert(order);
                Ok(true)
            }
            Entry::Occupied(_) => Ok(false),
        }
    }

    fn find(&self, id: OrderId) -> Result<Option<Order>, AppError> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<Option<Order>, AppError> {
        Ok(self.orders.get_mut(&id).map(|mut entry| {
            entry.apply(patch);
            entry.value().clone()
        }))
    }

    fn remove(&self, id: OrderId) -> Result<bool, AppError> {
        Ok(self.orders.remove(&id).is_some())
    }

    fn count(&self) -> Result<usize, AppError> {
        Ok(self.orders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UpdateMode;
    use serde_json::json;

    #[test]
    fn test_insert_and_find() {
        let repo = InMemoryOrderRepository::new();

        let inserted = repo
            .insert_if_absent(Order::new(3, json!({ "item": "latte" })))
            .unwrap();

        assert!(inserted);
        let found = repo.find(3).unwrap().unwrap();
        assert_eq!(found.record, json!({ "item": "latte" }));
    }

    #[test]
    fn test_insert_if_absent_rejects_taken_id() {
        let repo = InMemoryOrderRepository::new();
        repo.insert_if_absent(Order::new(3, json!({ "item": "latte" })))
            .unwrap();

        let inserted = repo
            .insert_if_absent(Order::new(3, json!({ "item": "mocha" })))
            .unwrap();

        assert!(!inserted);
        assert_eq!(
            repo.find(3).unwrap().unwrap().record,
            json!({ "item": "latte" })
        );
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_find_missing() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.find(42).unwrap().is_none());
    }

    #[test]
    fn test_list_returns_all_orders() {
        let repo = InMemoryOrderRepository::new();
        for id in 0..5 {
            repo.insert_if_absent(Order::new(id, json!({ "n": id })))
                .unwrap();
        }

        let mut ids: Vec<OrderId> = repo.list().unwrap().into_iter().map(|o| o.id).collect();
        ids.sort_unstable();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_update_existing() {
        let repo = InMemoryOrderRepository::new();
        repo.insert_if_absent(Order::new(1, json!({ "item": "latte" })))
            .unwrap();

        let updated = repo
            .update(
                1,
                OrderPatch {
                    record: json!({ "item": "flat white" }),
                    mode: UpdateMode::Replace,
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.record, json!({ "item": "flat white" }));
        assert_eq!(repo.find(1).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let repo = InMemoryOrderRepository::new();

        let updated = repo
            .update(
                9,
                OrderPatch {
                    record: json!({ "item": "tea" }),
                    mode: UpdateMode::Replace,
                },
            )
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_remove() {
        let repo = InMemoryOrderRepository::new();
        repo.insert_if_absent(Order::new(2, json!({}))).unwrap();

        assert!(repo.remove(2).unwrap());
        assert!(!repo.remove(2).unwrap());
        assert!(repo.find(2).unwrap().is_none());
    }
}
