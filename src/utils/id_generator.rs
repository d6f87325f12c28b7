//! Order identifier generation.
//!
//! Identifiers are drawn uniformly at random from an inclusive [`IdRange`].
//! Uniqueness is not checked here; see
//! [`crate::application::services::OrderService::create`].

use rand::Rng;
use serde_json::json;

use crate::domain::entities::OrderId;
use crate::error::AppError;

/// Default lower identifier bound.
pub const DEFAULT_MIN_ID: OrderId = 0;

/// Default upper identifier bound (inclusive).
pub const DEFAULT_MAX_ID: OrderId = 9;

/// Inclusive range of identifiers the store may hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    min: OrderId,
    max: OrderId,
}

impl IdRange {
    /// Creates a range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `min > max`.
    pub fn new(min: OrderId, max: OrderId) -> Result<Self, AppError> {
        if min > max {
            return Err(AppError::bad_request(
                "Identifier range lower bound exceeds upper bound",
                json!({ "min": min, "max": max }),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> OrderId {
        self.min
    }

    pub fn max(&self) -> OrderId {
        self.max
    }

    /// Number of distinct identifiers in the range.
    pub fn capacity(&self) -> u64 {
        u64::from(self.max - self.min) + 1
    }

    pub fn contains(&self, id: OrderId) -> bool {
        (self.min..=self.max).contains(&id)
    }

    /// Visits every identifier exactly once, starting at `start` and wrapping
    /// around to `min`. A `start` outside the range is clamped into it.
    pub fn scan_from(&self, start: OrderId) -> impl Iterator<Item = OrderId> {
        let start = start.clamp(self.min, self.max);
        (start..=self.max).chain(self.min..start)
    }
}

impl Default for IdRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ID,
            max: DEFAULT_MAX_ID,
        }
    }
}

/// Draws a random identifier from `range` using the thread-local RNG.
pub fn generate_id(range: &IdRange) -> OrderId {
    generate_id_with(&mut rand::rng(), range)
}

/// Draws a random identifier from `range` using the given RNG.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R, range: &IdRange) -> OrderId {
    rng.random_range(range.min..=range.max)
}
