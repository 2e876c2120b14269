//! Validated item name.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name identifying an inventory record.
///
/// Construction trims surrounding whitespace and rejects empty input, so a
/// held `ItemName` is always a usable identifier. `Serialize` only:
/// decoded data has to come back in through [`ItemName::new`], keeping the
/// non-empty invariant intact for loaded state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: &str) -> DomainResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ItemName {}
