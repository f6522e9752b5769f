//! Upload validation
//!
//! Uploaded photos arrive as base64 data URLs. The store itself trusts its
//! callers, so everything user-supplied is checked here before a save:
//! format (JPG, PNG or WEBP only), size (5MB cap) and the month bucket.

pub mod validator;

pub use validator::{validate_data_url, validate_month, ValidatedUpload, MAX_UPLOAD_BYTES};
