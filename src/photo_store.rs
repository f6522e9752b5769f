//! Photo store
//!
//! The persistence facade for the gallery: one JSON-encoded collection of
//! photo records kept under a single storage key, accessed through
//! list/save/delete.
//!
//! Components:
//! - `types`: the Photo record and display helpers.
//! - `store`: the PhotoStore facade over a storage backend.

pub mod store;
pub mod types;

pub use store::PhotoStore;
pub use types::{format_date, Photo, MONTH_NAMES};
