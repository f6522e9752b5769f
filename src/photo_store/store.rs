use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error_handling::types::StorageError;
use crate::photo_store::types::Photo;
use crate::storage::storage_trait::StorageBackend;

/// The storage key the whole collection lives under.
pub const STORAGE_KEY: &str = "galeri-sahabat-photos";

/// Persistence facade for the photo collection.
///
/// Every operation is an independent read-modify-write of the full collection
/// under one key; there is no in-memory mirror between calls. Two writers
/// that are not strictly sequenced (say, two processes pointed at the same
/// storage directory) can lose updates. That is a documented limitation of
/// the whole-collection-replace discipline, accepted for single-user use.
pub struct PhotoStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl PhotoStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Reads the whole persisted collection, newest first.
    ///
    /// A missing entry or one whose contents do not parse as a photo array
    /// yields an empty collection instead of an error; only a failing backend
    /// read propagates.
    pub fn list(&self) -> Result<Vec<Photo>, StorageError> {
        let raw = match self.backend.read(&self.key)? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_slice::<Vec<Photo>>(&raw) {
            Ok(photos) => Ok(photos),
            Err(e) => {
                warn!("Persisted collection is unreadable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Creates a photo record and persists the collection with it prepended.
    ///
    /// The store assigns the id and timestamp; the caller is responsible for
    /// having validated the data URL and the month bucket beforehand.
    pub fn save(&self, data_url: &str, month: u8, year: i32) -> Result<Photo, StorageError> {
        let photo = Photo {
            id: Uuid::new_v4(),
            data_url: data_url.to_string(),
            uploaded_at: Utc::now(),
            month,
            year: Some(year),
        };
        let mut photos = self.list()?;
        photos.insert(0, photo.clone());
        self.persist(&photos)?;
        info!("Saved photo {} into month {} of {}", photo.id, month, year);
        Ok(photo)
    }

    /// Removes the record with the given id, if there is one.
    ///
    /// Deleting an id that is not in the collection is a no-op, so a second
    /// delete of the same photo succeeds silently.
    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut photos = self.list()?;
        let before = photos.len();
        photos.retain(|p| p.id != id);
        if photos.len() == before {
            debug!("Delete of {} matched no record", id);
            return Ok(());
        }
        self.persist(&photos)?;
        info!("Deleted photo {}", id);
        Ok(())
    }

    /// Full-collection scan for one month/year view. Legacy records without
    /// a year belong to every year.
    pub fn photos_for_month(&self, month: u8, year: i32) -> Result<Vec<Photo>, StorageError> {
        let photos = self.list()?;
        Ok(photos.into_iter().filter(|p| p.in_bucket(month, year)).collect())
    }

    fn persist(&self, photos: &[Photo]) -> Result<(), StorageError> {
        let raw = serde_json::to_vec(photos).map_err(|e| {
            warn!("Failed to serialize collection: {}", e);
            StorageError::WriteFailed
        })?;
        self.backend.write(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;

    fn store() -> PhotoStore {
        PhotoStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_list_on_fresh_store_is_empty() {
        assert!(store().list().unwrap().is_empty());
    }

    #[test]
    fn test_list_on_garbage_entry_is_empty() {
        let backend = Arc::new(MemoryStorage::new());
        backend.write(STORAGE_KEY, b"not json at all").unwrap();
        let store = PhotoStore::new(backend);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_on_wrong_shape_entry_is_empty() {
        let backend = Arc::new(MemoryStorage::new());
        backend.write(STORAGE_KEY, br#"{"some":"object"}"#).unwrap();
        let store = PhotoStore::new(backend);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_grows_collection_by_one_with_matching_fields() {
        let store = store();
        let before = store.list().unwrap().len();
        let saved = store.save("data:image/png;base64,AAA", 5, 2024).unwrap();
        let photos = store.list().unwrap();
        assert_eq!(photos.len(), before + 1);
        let found = photos.iter().find(|p| p.id == saved.id).unwrap();
        assert_eq!(found.data_url, "data:image/png;base64,AAA");
        assert_eq!(found.month, 5);
        assert_eq!(found.year, Some(2024));
    }

    #[test]
    fn test_save_prepends_newest_first() {
        let store = store();
        let first = store.save("data:image/png;base64,AAA", 0, 2024).unwrap();
        let second = store.save("data:image/png;base64,BBB", 0, 2024).unwrap();
        let photos = store.list().unwrap();
        assert_eq!(photos[0].id, second.id);
        assert_eq!(photos[1].id, first.id);
    }

    #[test]
    fn test_ids_are_unique_across_saves() {
        let store = store();
        let a = store.save("data:image/png;base64,AAA", 1, 2024).unwrap();
        let b = store.save("data:image/png;base64,AAA", 1, 2024).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_delete_removes_record_and_is_idempotent() {
        let store = store();
        let saved = store.save("data:image/png;base64,AAA", 5, 2024).unwrap();
        store.delete(saved.id).unwrap();
        assert!(store.list().unwrap().iter().all(|p| p.id != saved.id));
        // Second delete of the same id is a silent no-op.
        store.delete(saved.id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_keeps_collection_intact() {
        let store = store();
        store.save("data:image/png;base64,AAA", 3, 2025).unwrap();
        store.delete(Uuid::new_v4()).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_save_list_delete_list_scenario() {
        let store = store();
        assert!(store.list().unwrap().is_empty());
        let saved = store.save("data:image/png;base64,AAA", 5, 2024).unwrap();
        let photos = store.list().unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].month, 5);
        assert_eq!(photos[0].year, Some(2024));
        assert_eq!(photos[0].data_url, "data:image/png;base64,AAA");
        store.delete(saved.id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_photos_for_month_filters_and_keeps_legacy_records() {
        let backend = Arc::new(MemoryStorage::new());
        let store = PhotoStore::new(backend.clone());
        store.save("data:image/png;base64,AAA", 5, 2024).unwrap();
        store.save("data:image/png;base64,BBB", 5, 2023).unwrap();
        store.save("data:image/png;base64,CCC", 6, 2024).unwrap();

        // Inject a legacy record with no year alongside the saved ones.
        let mut photos = store.list().unwrap();
        photos.push(Photo {
            id: Uuid::new_v4(),
            data_url: "data:image/jpeg;base64,DDD".into(),
            uploaded_at: Utc::now(),
            month: 5,
            year: None,
        });
        backend
            .write(STORAGE_KEY, &serde_json::to_vec(&photos).unwrap())
            .unwrap();

        let may_2024 = store.photos_for_month(5, 2024).unwrap();
        assert_eq!(may_2024.len(), 2); // the 2024 record plus the legacy one
        assert!(may_2024.iter().all(|p| p.month == 5));

        let may_1999 = store.photos_for_month(5, 1999).unwrap();
        assert_eq!(may_1999.len(), 1); // only the legacy record
        assert_eq!(may_1999[0].year, None);
    }

    #[test]
    fn test_collection_survives_roundtrip_through_backend() {
        let backend = Arc::new(MemoryStorage::new());
        let saved = {
            let store = PhotoStore::new(backend.clone());
            store.save("data:image/webp;base64,AAA", 2, 2026).unwrap()
        };
        // A fresh facade over the same backend sees the same collection.
        let store = PhotoStore::new(backend);
        let photos = store.list().unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, saved.id);
        assert_eq!(photos[0].uploaded_at, saved.uploaded_at);
    }
}
