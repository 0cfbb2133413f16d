//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! `TestEnvironment` owns a temporary data directory that is removed when it
//! goes out of scope, even if the test panics.
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::error::{StorageError, StorageResult};
use super::json::{JsonConnection, SlotStore};
use super::memory::MemoryStore;

/// RAII test environment backed by a temp directory
pub struct TestEnvironment {
    /// Kept alive so the directory is not removed until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> StorageResult<Self> {
        init_test_logging();
        let temp_dir = tempfile::Builder::new()
            .prefix("mednote_test_")
            .tempdir()
            .map_err(|e| StorageError::io("tempdir", e))?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// A fresh connection on the same directory, as after an app restart
    pub fn reopen(&self) -> StorageResult<JsonConnection> {
        JsonConnection::new(&self.base_path)
    }

    pub fn slots(&self) -> SlotStore {
        SlotStore::new(Arc::new(self.connection.clone()))
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("MEDNOTE_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// Slot store over a fresh in-memory store
pub fn memory_slots() -> SlotStore {
    init_test_logging();
    SlotStore::new(Arc::new(MemoryStore::new()))
}

/// Route `log` output through env_logger's test writer; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
