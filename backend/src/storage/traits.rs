//! # Storage Traits
//!
//! The byte-level store that record collections are persisted into. The
//! domain layer never talks to a concrete store; it goes through
//! [`SlotStore`](super::json::SlotStore), which holds one of these behind an
//! `Arc<dyn KeyValueStore>`.

use super::error::StorageResult;

/// A durable string key-value store, the equivalent of a browser's local storage.
///
/// Keys are flat names such as `mednote_patients`. Values are whole text
/// blobs; there is no partial update.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, atomically replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Returns true if a value was present
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// List every key currently holding a value
    fn keys(&self) -> StorageResult<Vec<String>>;
}
