use std::collections::HashMap;
use std::sync::Mutex;

use log::error;

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::StorageBackend;

/// In-memory backend. Nothing survives the process; useful for tests and for
/// running the gallery without touching the disk.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.lock().map_err(|e| {
            error!("Memory storage lock poisoned on read: {}", e);
            StorageError::ReadFailed
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| {
            error!("Memory storage lock poisoned on write: {}", e);
            StorageError::WriteFailed
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
