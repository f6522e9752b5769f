pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod photo_store;
pub mod storage;
pub mod upload;
pub mod web_interface;

pub use photo_store::{Photo, PhotoStore};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
