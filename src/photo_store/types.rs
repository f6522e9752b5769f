use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored photo plus its metadata.
///
/// Records are immutable once created: they are inserted by `save` and only
/// ever leave the collection through `delete`. Field names in the persisted
/// JSON stay camelCase so existing collections keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    /// Image bytes as a self-describing data URI (embeds the MIME type).
    pub data_url: String,
    /// Creation timestamp, only used for display formatting.
    pub uploaded_at: DateTime<Utc>,
    /// Calendar month bucket, 0-11.
    pub month: u8,
    /// Calendar year bucket. Legacy records written before year scoping have
    /// no year and count as belonging to every year the user views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Photo {
    /// Whether this photo belongs to the given month/year view, applying the
    /// legacy fallback for records without a year.
    pub fn in_bucket(&self, month: u8, year: i32) -> bool {
        self.month == month && self.year.map_or(true, |y| y == year)
    }
}

/// Month labels for the grid, Januari through Desember.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats an upload timestamp as dd-mm-yyyy for display.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d-%m-%Y").to_string()
}
