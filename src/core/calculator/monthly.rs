use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use tracing::trace;

use super::daily::compute_daily;
use super::local_date::local_date_key;
use crate::models::punch::PunchRecord;
use crate::models::stats::MonthlyStats;

/// Month totals for the month/year of `reference`, in the host time zone.
pub fn compute_monthly(
    records: &[PunchRecord],
    reference: NaiveDate,
    daily_target_minutes: f64,
) -> MonthlyStats {
    compute_monthly_in(records, reference, daily_target_minutes, &Local)
}

/// Same as [`compute_monthly`] with an explicit time zone.
///
/// The target is charged once per day with `total > 0`; days with only
/// unmatched punches and days without records are not charged.
pub fn compute_monthly_in<Tz: TimeZone>(
    records: &[PunchRecord],
    reference: NaiveDate,
    daily_target_minutes: f64,
    tz: &Tz,
) -> MonthlyStats {
    let mut by_day: BTreeMap<NaiveDate, Vec<PunchRecord>> = BTreeMap::new();

    for record in records {
        let Some(date) = local_date_key(record.timestamp, tz) else {
            continue;
        };
        if date.year() == reference.year() && date.month() == reference.month() {
            by_day.entry(date).or_default().push(record.clone());
        }
    }

    let mut stats = MonthlyStats::default();

    for (date, day_records) in &by_day {
        let day = compute_daily(day_records);
        trace!(%date, total = day.total, break_minutes = day.break_time, "day aggregated");

        stats.total_worked += day.total;
        stats.total_break += day.break_time;
        if day.total > 0.0 {
            stats.days_worked_count += 1;
        }
    }

    stats.balance = stats.total_worked - stats.days_worked_count as f64 * daily_target_minutes;
    stats
}
