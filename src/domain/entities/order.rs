//! Order entity and update semantics.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::error::AppError;

/// Integer key naming a live order.
pub type OrderId = u32;

/// A stored order.
///
/// `record` is the client payload exactly as received; the store never
/// inspects its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub record: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order stamped with the current time.
    pub fn new(id: OrderId, record: Value) -> Self {
        let now = Utc::now();
        Self {
            id,
            record,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a patch in place and bumps `updated_at`.
    pub fn apply(&mut self, patch: OrderPatch) {
        match patch.mode {
            UpdateMode::Replace => self.record = patch.record,
            UpdateMode::Merge => merge_record(&mut self.record, patch.record),
        }
        self.updated_at = Utc::now();
    }
}

/// Shallow merge: top-level keys of `incoming` win, other stored keys stay.
/// Anything that is not object-into-object falls back to replacement.
fn merge_record(current: &mut Value, incoming: Value) {
    match (current, incoming) {
        (Value::Object(stored), Value::Object(fields)) => {
            for (key, value) in fields {
                stored.insert(key, value);
            }
        }
        (current, incoming) => *current = incoming,
    }
}

/// How an update combines with the stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    #[default]
    Replace,
    Merge,
}

impl FromStr for UpdateMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(UpdateMode::Replace),
            "merge" => Ok(UpdateMode::Merge),
            other => Err(AppError::bad_request(
                "Update mode must be 'replace' or 'merge'",
                json!({ "provided": other }),
            )),
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Replace => f.write_str("replace"),
            UpdateMode::Merge => f.write_str("merge"),
        }
    }
}

/// New content for an existing order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPatch {
    pub record: Value,
    pub mode: UpdateMode,
}
