use chrono::{Local, NaiveDate, TimeZone};

use super::daily::compute_daily;
use super::local_date::local_date_key;
use crate::models::day_row::DayRow;
use crate::models::punch::{PunchRecord, sorted_by_timestamp};
use crate::models::punch_kind::PunchKind;
use crate::utils::date::days_in_month;
use crate::utils::formatting::format_hm;

/// One row per calendar day of `month`/`year`, in the host time zone.
pub fn build_month_rows(records: &[PunchRecord], month: u32, year: i32) -> Vec<DayRow> {
    build_month_rows_in(records, month, year, &Local)
}

/// Same as [`build_month_rows`] with an explicit time zone.
///
/// Each clock column shows the *first* punch of that kind on the day; the four
/// lookups are independent. The total column comes from `compute_daily`, so a
/// day with duplicate punches may show clocks that do not explain its total.
pub fn build_month_rows_in<Tz: TimeZone>(
    records: &[PunchRecord],
    month: u32,
    year: i32,
    tz: &Tz,
) -> Vec<DayRow> {
    let sorted = sorted_by_timestamp(records);

    (1..=days_in_month(month, year))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let day_records: Vec<PunchRecord> = sorted
                .iter()
                .filter(|r| local_date_key(r.timestamp, tz) == Some(date))
                .cloned()
                .collect();

            let clock = |kind: PunchKind| first_clock(&day_records, kind, tz);

            DayRow {
                day: date.format("%d").to_string(),
                date_full: date.format("%d/%m/%Y").to_string(),
                entry: clock(PunchKind::Entry),
                break_start: clock(PunchKind::BreakStart),
                break_end: clock(PunchKind::BreakEnd),
                exit: clock(PunchKind::Exit),
                total_hours: format_hm(compute_daily(&day_records).total),
            }
        })
        .collect()
}

/// `HH:MM` of the earliest record of `kind`, or `""`.
fn first_clock<Tz: TimeZone>(day_records: &[PunchRecord], kind: PunchKind, tz: &Tz) -> String {
    day_records
        .iter()
        .find(|r| r.kind == kind)
        .and_then(|r| r.datetime_in(tz))
        .map(|dt| dt.naive_local().format("%H:%M").to_string())
        .unwrap_or_default()
}
