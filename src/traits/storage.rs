//! Key-value storage trait abstraction.
//!
//! The kiosk persists two string-valued records. Putting the raw store behind
//! a trait keeps [`crate::storage::ComplaintStore`] independent of where the
//! bytes live and lets tests swap in an in-memory store.

use crate::error::StorageError;

/// Trait for durable string key-value storage.
///
/// Semantics follow a browser's local storage: one value per key, whole-value
/// overwrite, no transactions. Concurrent writers race and the last write
/// wins.
///
/// # Example
///
/// ```ignore
/// use suvidha::traits::KeyValueStore;
///
/// fn remember<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
///     store.set("greeting", "\"namaste\"")?;
///     assert_eq!(store.get("greeting")?.as_deref(), Some("\"namaste\""));
///     store.remove("greeting")
/// }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing is stored under the key
    /// - `Err(error)` if the store cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
