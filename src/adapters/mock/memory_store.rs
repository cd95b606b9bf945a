//! In-memory key-value store for testing.
//!
//! Stores values in a map, suitable for testing without file system access.
//! It can be switched into an "unavailable" mode to simulate disabled
//! storage, and counts writes so tests can assert that a no-op really
//! wrote nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share the same underlying map, like two handles onto one browser
/// profile.
///
/// # Example
///
/// ```ignore
/// use suvidha::adapters::mock::InMemoryStore;
/// use suvidha::traits::KeyValueStore;
///
/// let store = InMemoryStore::new();
/// store.set("k", "v")?;
/// assert_eq!(store.write_count(), 1);
///
/// store.set_unavailable(true);
/// assert!(store.get("k").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<Mutex<bool>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already present.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert_raw(key, value);
        store
    }

    /// Configure whether every operation should fail as unavailable.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    /// Number of successful `set`/`remove` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    /// Read a value without going through the trait (for assertions).
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Write a value without counting it (for test setup).
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if *self.unavailable.lock().unwrap() {
            return Err(StorageError::Unavailable {
                message: "mock storage disabled".to_string(),
            });
        }
        Ok(())
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.insert_raw(key, value);
        self.record_write();
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.values.lock().unwrap().remove(key);
        self.record_write();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let a = InMemoryStore::new();
        let b = a.clone();
        a.set("k", "from-a").unwrap();
        b.set("k", "from-b").unwrap();
        assert_eq!(a.get("k").unwrap().as_deref(), Some("from-b"));
    }

    #[test]
    fn test_unavailable_fails_everything() {
        let store = InMemoryStore::with_value("k", "v");
        store.set_unavailable(true);
        assert!(store.get("k").is_err());
        assert!(store.set("k", "w").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.write_count(), 0);

        store.set_unavailable(false);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::with_value("k", "v");
        store.remove("k").unwrap();
        assert_eq!(store.raw("k"), None);
    }
}
