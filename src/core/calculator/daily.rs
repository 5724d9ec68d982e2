use crate::models::punch::{PunchRecord, sorted_by_timestamp};
use crate::models::punch_kind::PunchKind;
use crate::models::stats::DailyStats;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Worked and break minutes for records believed to share one calendar day.
///
/// Only closed intervals count. An ENTRY left open at the end of the day is
/// dropped, and so is a break still open at EXIT (EXIT does not close it).
/// BREAK_END always reopens work.
pub fn compute_daily(records: &[PunchRecord]) -> DailyStats {
    let mut stats = DailyStats::default();
    let mut open_entry: Option<i64> = None;
    let mut open_break: Option<i64> = None;

    for record in sorted_by_timestamp(records) {
        let ts = record.timestamp;

        match record.kind {
            PunchKind::Entry => {
                open_entry = Some(ts);
            }
            PunchKind::BreakStart => {
                if let Some(start) = open_entry.take() {
                    stats.total += minutes_between(start, ts);
                }
                open_break = Some(ts);
            }
            PunchKind::BreakEnd => {
                if let Some(start) = open_break.take() {
                    stats.break_time += minutes_between(start, ts);
                }
                open_entry = Some(ts);
            }
            PunchKind::Exit => {
                if let Some(start) = open_entry.take() {
                    stats.total += minutes_between(start, ts);
                }
            }
        }
    }

    stats
}

/// Worked minutes minus the daily target (status view only).
pub fn daily_balance(stats: &DailyStats, daily_target_minutes: f64) -> f64 {
    stats.total - daily_target_minutes
}

fn minutes_between(start: i64, end: i64) -> f64 {
    (end as f64 - start as f64) / MS_PER_MINUTE
}
