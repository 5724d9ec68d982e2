use chrono::{NaiveDate, TimeZone};

/// Calendar date of an epoch-ms timestamp in `tz`.
///
/// Grouping always goes through this key, never through timestamp ranges, so
/// 23:59 and 00:01 of the next local day land in different groups.
pub fn local_date_key<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.date_naive())
}
