//! Storage Trait
//!
//! This module defines the `StorageBackend` trait, the interface the photo
//! store persists its collection through.
//!
//! Implementors of this trait are responsible for:
//! - Returning the current value of a named entry, if one was ever written
//! - Replacing the whole value of a named entry in one call
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;

/// The `StorageBackend` trait is the persistence port for keyed blobs.
///
/// The discipline is whole-value replace: `write` overwrites whatever was
/// stored under the key before, and `read` hands back the last written value.
/// Two writers that are not strictly sequenced can lose updates; callers that
/// need stronger guarantees must sequence their calls themselves.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the entry was never written, which is distinct
    /// from a read failure.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
