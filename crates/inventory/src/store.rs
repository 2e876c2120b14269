use std::collections::BTreeMap;

use stockroom_core::{DomainError, DomainResult, Entity, ItemName, Quantity};

use crate::audit::{AuditEntry, AuditLog};

/// A named quantity entry, as surfaced by store iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: ItemName,
    pub quantity: Quantity,
}

impl Entity for Record {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

/// What a removal did to the targeted record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity was decremented; the record remains with this total.
    Reduced(Quantity),
    /// The full quantity was removed and the record was deleted.
    Emptied,
}

/// The in-memory inventory store: an ordered mapping of item name to
/// quantity.
///
/// Invariants:
/// - every stored quantity is positive (a record whose quantity reaches
///   zero is deleted, and adding zero of an absent item creates nothing);
/// - iteration and persistence order is lexicographic by name.
///
/// Re-adding an existing name **sums** quantities.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: BTreeMap<ItemName, Quantity>,
}

impl Inventory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from raw persisted pairs, re-validating every one.
    ///
    /// Nothing is dropped silently: an empty name, a zero quantity, or a
    /// duplicate name fails the whole construction.
    pub fn from_records<I>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut records = BTreeMap::new();
        for (raw_name, count) in pairs {
            let name = ItemName::new(&raw_name)?;
            if count == 0 {
                return Err(DomainError::validation(format!(
                    "zero quantity for item {name}"
                )));
            }
            if records
                .insert(name.clone(), Quantity::from_count(count))
                .is_some()
            {
                return Err(DomainError::validation(format!(
                    "duplicate record for item {name}"
                )));
            }
        }
        Ok(Self { records })
    }

    /// Add `qty` of `name` to the store and return the new total.
    ///
    /// Validation happens at this boundary: the name must be non-empty and
    /// the quantity non-negative. When a log is supplied, one audit entry
    /// describing the addition is appended to it; `None` means the call has
    /// no buffer at all.
    pub fn add_item(
        &mut self,
        name: &str,
        qty: i64,
        log: Option<&mut AuditLog>,
    ) -> DomainResult<Quantity> {
        let name = ItemName::new(name)?;
        let qty = Quantity::new(qty)?;

        let current = self.quantity_of_name(&name);
        let total = current
            .checked_add(qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow for item {name}")))?;

        // Adding zero of an absent item must not create a zero record.
        if !total.is_zero() {
            self.records.insert(name.clone(), total);
        }

        if let Some(log) = log {
            log.push(AuditEntry::added(name, qty, total));
        }
        Ok(total)
    }

    /// Remove `qty` of `name`; deletes the record when it reaches zero.
    ///
    /// The record must exist, and `qty` must be non-negative and no larger
    /// than the stored quantity.
    pub fn remove_item(&mut self, name: &str, qty: i64) -> DomainResult<RemoveOutcome> {
        let name = ItemName::new(name)?;
        let qty = Quantity::new(qty)?;

        let current = match self.records.get(&name) {
            Some(quantity) => *quantity,
            None => return Err(DomainError::not_found(format!("item {name}"))),
        };

        let remaining = current.checked_sub(qty).ok_or_else(|| {
            DomainError::validation(format!(
                "cannot remove {qty} of {name}: only {current} in stock"
            ))
        })?;

        if remaining.is_zero() {
            self.records.remove(&name);
            Ok(RemoveOutcome::Emptied)
        } else {
            self.records.insert(name, remaining);
            Ok(RemoveOutcome::Reduced(remaining))
        }
    }

    /// Stored quantity for `name`; zero if absent.
    pub fn quantity_of(&self, name: &str) -> DomainResult<Quantity> {
        Ok(self.quantity_of_name(&ItemName::new(name)?))
    }

    fn quantity_of_name(&self, name: &ItemName) -> Quantity {
        self.records.get(name).copied().unwrap_or(Quantity::ZERO)
    }

    /// Names whose quantity is strictly below `threshold`, in name order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.records
            .iter()
            .filter(|(_, quantity)| **quantity < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All records, ordered by name.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.records.iter().map(|(name, quantity)| Record {
            name: name.clone(),
            quantity: *quantity,
        })
    }

    /// Borrowing iteration over `(name, quantity)` pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.records.iter().map(|(name, quantity)| (name, *quantity))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
