//! Time utilities: parsing HH:MM, composing local timestamps, formatting clocks.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Composes a timestamp (epoch ms) from local calendar fields.
///
/// An ambiguous local time (DST fall-back) resolves to the earliest instant;
/// a time inside a DST gap is rejected.
pub fn compose_timestamp<Tz: TimeZone>(date: NaiveDate, time: NaiveTime, tz: &Tz) -> AppResult<i64> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{} {} does not exist in the local time zone",
            date,
            time.format("%H:%M")
        ))),
    }
}

/// `HH:MM` of a zoned timestamp.
pub fn format_clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}
