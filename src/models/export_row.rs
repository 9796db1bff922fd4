use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::{ResolutionResult, TitleEntry};

/// Column order expected by the watchlist importer
pub const CSV_HEADER: [&str; 4] = ["id", "media_type", "watchlisted_at", "original_title"];

/// One line of the import CSV
///
/// Field order matches [`CSV_HEADER`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputRow {
    pub id: String,
    pub media_type: String,
    pub watchlisted_at: String,
    pub original_title: String,
}

impl OutputRow {
    pub fn new(result: &ResolutionResult, entry: &TitleEntry, watchlisted_at: &str) -> Self {
        Self {
            id: result.to_string(),
            media_type: entry.kind.as_str().to_string(),
            watchlisted_at: watchlisted_at.to_string(),
            original_title: entry.title.clone(),
        }
    }
}

/// Formats the run timestamp as `2024-01-02T03:04:05.000Z`
pub fn watchlist_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
