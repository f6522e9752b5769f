use serde::{Deserialize, Serialize};

/// API error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of POST /api/photos.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub data_url: String,
    pub month: u32,
    pub year: i32,
}

/// Query parameters of GET /api/photos. Filtering only happens when both a
/// month and a year are given; otherwise the whole collection is returned.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}
