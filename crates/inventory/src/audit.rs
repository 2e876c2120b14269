//! Audit trail for store mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{ItemName, Quantity};

/// One audited mutation: what was added, to which record, and the total
/// the record ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub name: ItemName,
    pub added: Quantity,
    pub total: Quantity,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn added(name: ItemName, added: Quantity, total: Quantity) -> Self {
        Self {
            name,
            added,
            total,
            occurred_at: Utc::now(),
        }
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: added {} of {} (now {})",
            self.occurred_at.to_rfc3339(),
            self.added,
            self.name,
            self.total
        )
    }
}

/// Append-only sequence of audit entries.
///
/// There is no process-wide default buffer: every log is constructed and
/// owned by exactly one caller, so entries from independent calls can never
/// bleed into each other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLog(Vec<AuditEntry>);

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AuditEntry) {
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a AuditLog {
    type Item = &'a AuditEntry;
    type IntoIter = core::slice::Iter<'a, AuditEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
