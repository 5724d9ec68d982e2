use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::punch_kind::PunchKind;

/// A single timestamped punch.
///
/// `timestamp` is epoch milliseconds taken from the local clock. Records are
/// immutable once stored; the only deletion is a bulk clear of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRecord {
    pub id: String,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: PunchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PunchRecord {
    pub fn new(id: impl Into<String>, timestamp: i64, kind: PunchKind) -> Self {
        Self {
            id: id.into(),
            timestamp,
            kind,
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    /// Timestamp in the given zone; `None` when out of chrono's range.
    pub fn datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Returns a copy sorted ascending by timestamp; the input is left untouched.
pub fn sorted_by_timestamp(records: &[PunchRecord]) -> Vec<PunchRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}
