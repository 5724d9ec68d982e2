//! Recording punches: live punch, manual entry and bulk clear.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::{debug, info};

use crate::core::calculator::local_date_key;
use crate::db::kv::KeyValueStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::{PunchRecord, sorted_by_timestamp};
use crate::models::punch_kind::PunchKind;
use crate::utils::date::parse_date;
use crate::utils::time::{compose_timestamp, parse_time};

/// Records of `date` in `tz`, sorted ascending.
pub fn records_on<Tz: TimeZone>(records: &[PunchRecord], date: NaiveDate, tz: &Tz) -> Vec<PunchRecord> {
    sorted_by_timestamp(records)
        .into_iter()
        .filter(|r| local_date_key(r.timestamp, tz) == Some(date))
        .collect()
}

/// Suggested next punch given the records of one day.
pub fn next_kind(day_records: &[PunchRecord]) -> PunchKind {
    match day_records.iter().max_by_key(|r| r.timestamp).map(|r| r.kind) {
        None | Some(PunchKind::Exit) => PunchKind::Entry,
        Some(PunchKind::Entry) => PunchKind::BreakStart,
        Some(PunchKind::BreakStart) => PunchKind::BreakEnd,
        Some(PunchKind::BreakEnd) => PunchKind::Exit,
    }
}

/// `"{timestamp:x}-{seq}"`, with the smallest `seq` not already taken.
pub fn generate_id(existing: &[PunchRecord], timestamp: i64) -> String {
    let taken: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
    let prefix = format!("{timestamp:x}");

    (0u32..)
        .map(|seq| format!("{prefix}-{seq}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or(prefix)
}

pub struct PunchLogic;

impl PunchLogic {
    /// Appends a punch at `now`. Without an explicit kind the suggestion from
    /// today's records is used.
    pub fn punch<S: KeyValueStore, Tz: TimeZone>(
        store: &mut ProfileStore<S>,
        profile_id: &str,
        kind: Option<PunchKind>,
        now: &DateTime<Tz>,
        note: Option<String>,
    ) -> AppResult<PunchRecord> {
        let mut records = store.records(profile_id)?;

        let kind = match kind {
            Some(k) => k,
            None => {
                let today = records_on(&records, now.date_naive(), &now.timezone());
                next_kind(&today)
            }
        };

        let ts = now.timestamp_millis();
        let record = PunchRecord::new(generate_id(&records, ts), ts, kind).with_note(note);

        records.push(record.clone());
        store.save_records(profile_id, &records)?;

        info!(profile = profile_id, kind = kind.as_str(), id = %record.id, "punch recorded");
        Ok(record)
    }

    /// Records a punch at a user-chosen local date and time.
    /// Input is validated before any record is built.
    pub fn add_manual<S: KeyValueStore, Tz: TimeZone>(
        store: &mut ProfileStore<S>,
        profile_id: &str,
        date: &str,
        time: &str,
        kind: PunchKind,
        note: Option<String>,
        tz: &Tz,
    ) -> AppResult<PunchRecord> {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
        let ts = compose_timestamp(d, t, tz)?;

        let mut records = store.records(profile_id)?;
        let record = PunchRecord::new(generate_id(&records, ts), ts, kind).with_note(note);

        records.push(record.clone());
        store.save_records(profile_id, &records)?;

        info!(profile = profile_id, kind = kind.as_str(), %d, "manual punch recorded");
        Ok(record)
    }

    /// Deletes every record of the profile. Returns how many were removed.
    pub fn clear<S: KeyValueStore>(store: &mut ProfileStore<S>, profile_id: &str) -> AppResult<usize> {
        let count = store.records(profile_id)?.len();
        store.clear_records(profile_id)?;
        debug!(profile = profile_id, count, "records cleared");
        Ok(count)
    }
}
