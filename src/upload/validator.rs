use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::error_handling::types::UploadError;

/// Size cap per photo, matching the 5MB upload limit shown in the UI.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A data URL that passed validation.
#[derive(Debug, PartialEq)]
pub struct ValidatedUpload {
    pub mime: String,
    /// Size of the image after base64 decoding, in bytes.
    pub decoded_len: usize,
}

fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:(image/[a-z0-9.+-]+);base64,([A-Za-z0-9+/]+={0,2})$")
            .expect("data URL pattern is valid")
    })
}

/// Checks that `data_url` is a base64 data URL for a supported image format
/// and that the encoded image fits the size cap.
///
/// The payload is never decoded; its decoded size follows from the base64
/// length and padding, which requires the payload length to be a multiple
/// of four the way every encoder emits it.
pub fn validate_data_url(data_url: &str) -> Result<ValidatedUpload, UploadError> {
    let captures = data_url_pattern()
        .captures(data_url)
        .ok_or(UploadError::NotADataUrl)?;

    let mime = &captures[1];
    if !matches!(mime, "image/jpeg" | "image/png" | "image/webp") {
        return Err(UploadError::UnsupportedFormat(mime.to_string()));
    }

    let payload = &captures[2];
    if payload.len() % 4 != 0 {
        return Err(UploadError::NotADataUrl);
    }
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    let decoded_len = payload.len() / 4 * 3 - padding;
    if decoded_len > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(decoded_len));
    }

    debug!("Validated {} upload of {} byte(s)", mime, decoded_len);
    Ok(ValidatedUpload {
        mime: mime.to_string(),
        decoded_len,
    })
}

/// Narrows a month number to the 0-11 bucket range.
pub fn validate_month(month: u32) -> Result<u8, UploadError> {
    if month > 11 {
        return Err(UploadError::BadMonth(month));
    }
    Ok(month as u8)
}
