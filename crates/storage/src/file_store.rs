use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stockroom_inventory::Inventory;

use crate::error::StorageError;

/// Handle to the persisted inventory file.
///
/// All reads and writes go through scoped filesystem operations, so the
/// underlying file handle is released on every exit path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted store.
    ///
    /// An absent file is [`StorageError::Missing`]; undecodable bytes are
    /// [`StorageError::Corrupt`]; decodable bytes that violate domain
    /// invariants are [`StorageError::Invalid`]. Every entry is
    /// re-validated on the way in, so a hand-edited file cannot smuggle an
    /// empty name or a non-positive count into the store.
    pub fn load(&self) -> Result<Inventory, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let counts: BTreeMap<String, serde_json::Number> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        let mut pairs = Vec::with_capacity(counts.len());
        for (name, count) in counts {
            let count = count.as_u64().ok_or_else(|| StorageError::Invalid {
                path: self.path.clone(),
                reason: format!("quantity {count} for item {name:?} is not a non-negative integer"),
            })?;
            pairs.push((name, count));
        }

        let store = Inventory::from_records(pairs).map_err(|err| StorageError::Invalid {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;

        tracing::debug!(
            path = %self.path.display(),
            records = store.len(),
            "loaded inventory"
        );
        Ok(store)
    }

    /// Load the persisted store, treating an absent file as an empty store.
    ///
    /// Only [`StorageError::Missing`] is recovered; corrupt or invalid data
    /// still propagates.
    pub fn load_or_empty(&self) -> Result<Inventory, StorageError> {
        match self.load() {
            Ok(store) => Ok(store),
            Err(StorageError::Missing { path }) => {
                tracing::warn!(
                    path = %path.display(),
                    "inventory file not found; starting with an empty store"
                );
                Ok(Inventory::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Persist the full store, truncating any previous contents.
    ///
    /// Write failures (permissions, disk full) surface as
    /// [`StorageError::Io`]; they are reported, not retried.
    pub fn save(&self, store: &Inventory) -> Result<(), StorageError> {
        let counts: BTreeMap<&str, u64> = store
            .iter()
            .map(|(name, quantity)| (name.as_str(), quantity.count()))
            .collect();

        let mut bytes =
            serde_json::to_vec_pretty(&counts).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        bytes.push(b'\n');

        fs::write(&self.path, bytes).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            records = store.len(),
            "saved inventory"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("inventory.json"))
    }

    fn sample_store() -> Inventory {
        let mut store = Inventory::new();
        store.add_item("zebra", 2, None).unwrap();
        store.add_item("apple", 7, None).unwrap();
        store
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);
        let store = sample_store();

        file.save(&store).unwrap();
        let loaded = file.load().unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn saved_file_is_sorted_pretty_json() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);
        file.save(&sample_store()).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw, "{\n  \"apple\": 7,\n  \"zebra\": 2\n}\n");
    }

    #[test]
    fn load_missing_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let err = file_store(&dir).load().unwrap_err();
        assert!(matches!(err, StorageError::Missing { .. }));
    }

    #[test]
    fn load_or_empty_recovers_only_from_missing() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);

        let store = file.load_or_empty().unwrap();
        assert!(store.is_empty());

        fs::write(file.path(), "not json at all").unwrap();
        let err = file.load_or_empty().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn load_undecodable_bytes_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);

        for raw in ["{ truncated", "[1, 2, 3]", "{\"apple\": \"many\"}"] {
            fs::write(file.path(), raw).unwrap();
            let err = file.load().unwrap_err();
            assert!(matches!(err, StorageError::Corrupt { .. }), "raw: {raw}");
        }
    }

    #[test]
    fn load_invalid_entries_is_invalid() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);

        for raw in ["{\"apple\": -1}", "{\"apple\": 0}", "{\"apple\": 1.5}", "{\"\": 3}"] {
            fs::write(file.path(), raw).unwrap();
            let err = file.load().unwrap_err();
            assert!(matches!(err, StorageError::Invalid { .. }), "raw: {raw}");
        }
    }

    #[test]
    fn save_into_missing_directory_is_io() {
        let dir = TempDir::new().unwrap();
        let file = FileStore::new(dir.path().join("no-such-dir").join("inventory.json"));

        let err = file.save(&sample_store()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn save_truncates_previous_contents() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);

        file.save(&sample_store()).unwrap();

        let mut smaller = Inventory::new();
        smaller.add_item("fig", 1, None).unwrap();
        file.save(&smaller).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, smaller);
        assert_eq!(loaded.len(), 1);
    }
}
