//! Non-negative stock quantity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Stock count of an inventory record.
///
/// Stored as an unsigned count, so a held `Quantity` can never be negative.
/// Signed input is validated at construction; arithmetic is checked and
/// never wraps.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validate a signed count from the outside world.
    pub fn new(qty: i64) -> DomainResult<Self> {
        u64::try_from(qty)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity must be non-negative (got {qty})")))
    }

    pub fn from_count(count: u64) -> Self {
        Self(count)
    }

    pub fn count(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}
