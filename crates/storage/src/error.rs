//! Storage error model.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or saving the persisted inventory file.
///
/// The variants are deliberately distinct: only [`StorageError::Missing`]
/// is recoverable (callers may fall back to an empty store); corrupt or
/// invalid data always propagates.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The inventory file does not exist.
    #[error("inventory file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but its bytes are not the expected JSON shape.
    #[error("corrupt inventory file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its contents violate a domain invariant
    /// (empty name, non-positive quantity, duplicate record).
    #[error("invalid inventory data in {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    /// Reading or writing the file failed (permissions, disk full, ...).
    #[error("io failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
