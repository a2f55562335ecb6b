use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Lowest mood score a diary entry can carry.
pub const EMOTION_MIN: u8 = 1;
/// Highest mood score a diary entry can carry.
pub const EMOTION_MAX: u8 = 5;

/// A single diary record. Ids are handed out by [`crate::state::DiaryData`]
/// and are never reused; `create_date` is stamped once and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub emotion: u8,
    pub create_date: i64,
}

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub author: String,
    pub content: String,
    pub emotion: u8,
}

#[derive(Debug, Deserialize)]
pub struct EditEntryRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub total: usize,
    pub entries: Vec<Entry>,
}

/// Derived mood statistics. `good_ratio` is `None` for an empty diary; the
/// page renders that as `--` instead of a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryStats {
    pub good_count: usize,
    pub bad_count: usize,
    pub good_ratio: Option<f64>,
}
