//! # Repository
//!
//! An ordered in-memory collection of one record kind, mirrored in full to a
//! single slot of the [`SlotStore`] after every change.
//!
//! The in-memory sequence is the source of truth. A mutation updates it first
//! and then writes the complete snapshot; if the write fails the error is
//! returned but the in-memory change is kept, and the next successful write
//! (or [`Repository::flush`]) persists it.

use log::{debug, error, info, warn};
use std::sync::Arc;

use super::id_generator::IdGenerator;
use super::models::{NewRecord, PatientScoped, Record};
use crate::storage::{SlotStore, StorageError, StorageResult};

/// Bound on id redraws when the generator returns an id already in use
const MAX_ID_ATTEMPTS: usize = 16;

pub struct Repository<T: Record> {
    key: String,
    records: Vec<T>,
    slots: SlotStore,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Record> Repository<T> {
    /// Load the collection stored under `key`, or start from `seed` if the key
    /// has never been written or cannot be decoded
    pub fn load(
        slots: SlotStore,
        key: impl Into<String>,
        seed: Vec<T>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let key = key.into();
        let records = slots.load(&key, seed);
        info!("Loaded {} {} records from '{}'", records.len(), T::KIND, key);

        Self {
            key,
            records,
            slots,
            ids,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a new record with a freshly generated id and persist.
    /// Returns the stored record.
    pub fn add<N>(&mut self, data: N) -> StorageResult<T>
    where
        N: NewRecord<Output = T>,
    {
        let id = self.fresh_id()?;
        let record = data.into_record(id);
        self.records.push(record.clone());
        info!("Added {} {}", T::KIND, record.id());

        self.persist()?;
        Ok(record)
    }

    /// Replace the first record with the same id and persist.
    /// Returns false, without touching the collection, when the id is unknown.
    pub fn update(&mut self, record: T) -> StorageResult<bool> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id() == record.id()) else {
            warn!("Ignoring update for unknown {} {}", T::KIND, record.id());
            return Ok(false);
        };

        *slot = record;
        info!("Updated {} {}", T::KIND, slot.id());

        self.persist()?;
        Ok(true)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// First record matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|r| predicate(*r))
    }

    /// Copies of all records matching `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let matches: Vec<T> = self.records.iter().filter(|r| predicate(*r)).cloned().collect();
        debug!("Filtered {} of {} {} records", matches.len(), self.records.len(), T::KIND);
        matches
    }

    /// The live collection in insertion order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the current collection regardless of whether it changed
    pub fn flush(&self) -> StorageResult<()> {
        self.persist()
    }

    fn persist(&self) -> StorageResult<()> {
        self.slots.save(&self.key, &self.records)
    }

    fn fresh_id(&self) -> StorageResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.get_by_id(&id).is_none() {
                return Ok(id);
            }
            warn!("Generated {} id {} is already taken, drawing another", T::KIND, id);
        }

        error!("Gave up drawing a {} id after {} attempts", T::KIND, MAX_ID_ATTEMPTS);
        Err(StorageError::IdCollision {
            kind: T::KIND,
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl<T: PatientScoped> Repository<T> {
    /// Copies of the records owned by `patient_id`, in insertion order
    pub fn for_patient(&self, patient_id: &str) -> Vec<T> {
        self.filter(|r| r.patient_id() == patient_id)
    }
}
