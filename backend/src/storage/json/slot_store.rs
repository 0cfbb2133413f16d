use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::KeyValueStore;

/// Reads and writes whole JSON collections under named slots.
///
/// A slot holds a plain JSON array of records: no envelope, no version field.
/// Loading never fails; a missing or unreadable slot yields the caller's
/// fallback and the problem is logged.
#[derive(Clone)]
pub struct SlotStore {
    store: Arc<dyn KeyValueStore>,
}

impl SlotStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the collection saved under `key`, or `fallback` if there is none
    /// or it cannot be decoded
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: Vec<T>) -> Vec<T> {
        self.load_value(key).unwrap_or(fallback)
    }

    /// Serialize `records` and overwrite the slot at `key`
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StorageResult<()> {
        self.save_value(key, records)?;
        debug!("Saved {} records to '{}'", records.len(), key);
        Ok(())
    }

    /// Load a single value. `None` when the slot is missing or malformed.
    pub fn load_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved data under '{}', using fallback", key);
                return None;
            }
            Err(e) => {
                error!("Error reading from store key '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error reading from store key '{}': {}", key, e);
                None
            }
        }
    }

    pub fn save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e))?;
        self.store.set(key, &json)
    }

    /// True if something has ever been written under `key`
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.store.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::test_utils::TestEnvironment;
    use shared::Reminder;

    fn reminder(id: &str, date_time: &str) -> Reminder {
        Reminder {
            id: id.to_string(),
            patient_id: "1".to_string(),
            date_time: date_time.to_string(),
            note: format!("note {}", id),
        }
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        let slots = SlotStore::new(Arc::new(MemoryStore::new()));
        let fallback = vec![reminder("r1", "2025-10-25T12:30:00")];

        assert_eq!(slots.load("mednote_reminders", fallback.clone()), fallback);
    }

    #[test]
    fn test_malformed_content_returns_fallback() {
        let store = Arc::new(MemoryStore::new());
        store.set("mednote_reminders", "{not json").unwrap();
        let slots = SlotStore::new(store);
        let fallback = vec![reminder("r1", "2025-10-25T12:30:00")];

        assert_eq!(slots.load("mednote_reminders", fallback.clone()), fallback);
    }

    #[test]
    fn test_wrong_shape_returns_fallback() {
        let store = Arc::new(MemoryStore::new());
        store.set("mednote_reminders", r#"[{"id":"r1"}]"#).unwrap();
        let slots = SlotStore::new(store);

        let loaded: Vec<Reminder> = slots.load("mednote_reminders", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_saved_empty_collection_does_not_fall_back() {
        let slots = SlotStore::new(Arc::new(MemoryStore::new()));
        slots.save::<Reminder>("mednote_reminders", &[]).unwrap();

        let loaded = slots.load("mednote_reminders", vec![reminder("r1", "2025-10-25T12:30:00")]);
        assert!(loaded.is_empty());
        assert!(slots.contains("mednote_reminders").unwrap());
    }

    #[test]
    fn test_save_then_load_on_disk_keeps_order() {
        let env = TestEnvironment::new().unwrap();
        let slots = SlotStore::new(Arc::new(env.connection.clone()));
        let records = vec![
            reminder("r2", "2025-11-05T10:30:00"),
            reminder("r1", "2025-10-25T12:30:00"),
        ];

        slots.save("mednote_reminders", &records).unwrap();

        let reopened = SlotStore::new(Arc::new(env.reopen().unwrap()));
        assert_eq!(reopened.load("mednote_reminders", Vec::<Reminder>::new()), records);
    }

    #[test]
    fn test_saved_blob_is_a_plain_array() {
        let store = Arc::new(MemoryStore::new());
        let slots = SlotStore::new(store.clone());
        slots.save("mednote_reminders", &[reminder("r1", "2025-10-25T12:30:00")]).unwrap();

        let raw = store.get("mednote_reminders").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["patientId"], "1");
    }
}
