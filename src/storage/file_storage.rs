use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::StorageBackend;

pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create storage dir {}: {}", base_path.display(), e);
            StorageError::WriteFailed
        })?;
        info!("FileStorage initialized at {}", base_path.display());
        Ok(Self { base_path })
    }

    /// Construct FileStorage using env var GALERI_STORAGE_DIR if set, otherwise the given directory.
    pub fn new_with_override<P: AsRef<Path>>(fallback: P) -> Result<Self, StorageError> {
        if let Ok(dir) = std::env::var("GALERI_STORAGE_DIR") {
            info!("Using FileStorage from GALERI_STORAGE_DIR: {}", dir);
            return Self::new(PathBuf::from(dir));
        }
        Self::new(fallback)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.entry_path(key);
        if !path.exists() {
            debug!("No entry at {}", path.display());
            return Ok(None);
        }
        let mut buf = Vec::new();
        File::open(&path)
            .and_then(|mut f| f.read_to_end(&mut buf))
            .map_err(|e| {
                error!("Failed to read entry {}: {}", path.display(), e);
                StorageError::ReadFailed
            })?;
        debug!("Read {} byte(s) from {}", buf.len(), path.display());
        Ok(Some(buf))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        // Write to a sibling temp file and rename so a crash mid-write cannot
        // leave a truncated entry behind.
        let tmp = self.base_path.join(format!("{}.json.tmp", key));
        let mut f = File::create(&tmp).map_err(|e| {
            error!("Failed to create temp entry {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        f.write_all(value).map_err(|e| {
            error!("Failed to write temp entry {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            error!("Failed to move entry into place {}: {}", path.display(), e);
            StorageError::WriteFailed
        })?;
        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }
}
