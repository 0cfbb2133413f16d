//! # Storage Module
//!
//! Durable state for the record store. The domain layer sees a
//! [`SlotStore`], which persists whole collections as JSON under fixed keys
//! of a [`KeyValueStore`].
//!
//! - **json**: one file per key under the data directory, plus the slot adapter
//! - **memory**: an in-process store for tests and ephemeral sessions

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use error::{StorageError, StorageResult};
pub use json::{JsonConnection, SlotStore};
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
