//! Storage subsystem
//!
//! This module provides the storage port the photo collection is persisted
//! through, plus its concrete backends.
//!
//! Components:
//! - `storage_trait`: the StorageBackend trait defining a uniform get/replace API.
//! - `file_storage`: filesystem-backed implementation, one file per key.
//! - `memory_storage`: in-memory implementation for tests and ephemeral runs.

pub mod file_storage;
pub mod memory_storage;
pub mod storage_trait;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use storage_trait::StorageBackend;
