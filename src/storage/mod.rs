//! Cart Persistence Boundary
//!
//! The cart store persists its state through a key-value style adapter,
//! the stand-in for browser local storage in the original design. The
//! contract is deliberately forgiving: a failed `save` is best effort
//! and a failed or absent `load` means "start empty". Adapter failures
//! are logged and swallowed, never surfaced to callers.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::cart::models::PersistedCart;

/// Key-value storage contract consumed by the cart store.
///
/// Implementations must never panic or propagate errors; the store
/// keeps operating in memory when persistence misbehaves.
pub trait StorageAdapter: Send + Sync {
    /// Returns the previously persisted cart, or `None` when nothing
    /// usable is stored.
    fn load(&self) -> Option<PersistedCart>;

    /// Persists the cart, best effort.
    fn save(&self, cart: &PersistedCart);
}

/// Adapters stay usable when shared behind an `Arc`.
impl<T: StorageAdapter + ?Sized> StorageAdapter for std::sync::Arc<T> {
    fn load(&self) -> Option<PersistedCart> {
        (**self).load()
    }

    fn save(&self, cart: &PersistedCart) {
        (**self).save(cart);
    }
}

// =============================================================================
// JSON File Adapter
// =============================================================================

/// Persists the cart as a single JSON document on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates an adapter backed by the given file path. The file is
    /// created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageAdapter for JsonFileStorage {
    fn load(&self) -> Option<PersistedCart> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cart load failed");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(cart) => Some(cart),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "stored cart is unreadable, starting empty");
                None
            }
        }
    }

    fn save(&self, cart: &PersistedCart) {
        let json = match serde_json::to_vec(cart) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "cart serialization failed");
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), error = %err, "cart save failed");
        }
    }
}

// =============================================================================
// In-Memory Adapter
// =============================================================================

/// Keeps the persisted cart in memory. Used by tests and by sessions
/// that should not outlive the process.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<PersistedCart>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory adapter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Option<PersistedCart> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn save(&self, cart: &PersistedCart) {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(cart.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::models::PersistedLine;
    use std::path::Path;
    use uuid::Uuid;

    fn sample_cart() -> PersistedCart {
        PersistedCart {
            lines: vec![
                PersistedLine { product_id: 1, quantity: 2 },
                PersistedLine { product_id: 5, quantity: 1 },
            ],
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("shopfront-test-{}.json", Uuid::new_v4().simple()))
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn json_file_round_trip_preserves_pairs() {
        let path = temp_path();
        let storage = JsonFileStorage::new(&path);

        storage.save(&sample_cart());
        let loaded = storage.load().unwrap();

        assert_eq!(loaded.lines.len(), 2);
        assert_eq!(loaded.lines[0].product_id, 1);
        assert_eq!(loaded.lines[0].quantity, 2);
        assert_eq!(loaded.lines[1].product_id, 5);
        assert_eq!(loaded.lines[1].quantity, 1);

        cleanup(&path);
    }

    #[test]
    fn json_file_serializes_as_a_sequence_of_pairs() {
        let path = temp_path();
        let storage = JsonFileStorage::new(&path);

        storage.save(&sample_cart());
        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();

        assert_eq!(raw[0]["productId"], 1);
        assert_eq!(raw[0]["quantity"], 2);

        cleanup(&path);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let storage = JsonFileStorage::new(temp_path());
        assert!(storage.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let path = temp_path();
        std::fs::write(&path, b"not json {{{").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(storage.load().is_none());

        cleanup(&path);
    }

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().is_none());

        storage.save(&sample_cart());
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.lines.len(), 2);
    }
}
