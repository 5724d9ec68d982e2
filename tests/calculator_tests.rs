mod common;
use common::{full_day, offset_ms, rec, utc_ms};

use chrono::{FixedOffset, Local, NaiveDate, NaiveTime, Utc};
use rtimecard::core::calculator::{
    build_month_rows, build_month_rows_in, compute_daily, compute_monthly, compute_monthly_in,
    daily_balance, local_date_key,
};
use rtimecard::utils::time::compose_timestamp;
use rtimecard::models::punch_kind::PunchKind;
use rtimecard::utils::date::days_in_month;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// ---------------------------
// compute_daily
// ---------------------------

#[test]
fn test_daily_empty_is_zero() {
    let stats = compute_daily(&[]);
    assert_eq!(stats.total, 0.0);
    assert_eq!(stats.break_time, 0.0);
}

#[test]
fn test_daily_entry_exit() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 17, 0), PunchKind::Exit),
    ];
    let stats = compute_daily(&records);
    assert_eq!(stats.total, 480.0);
    assert_eq!(stats.break_time, 0.0);
}

#[test]
fn test_daily_with_lunch_break() {
    let stats = compute_daily(&full_day(2025, 3, 10, "d"));
    assert_eq!(stats.total, 480.0);
    assert_eq!(stats.break_time, 60.0);
}

#[test]
fn test_daily_unsorted_input_is_sorted_first() {
    let mut records = full_day(2025, 3, 10, "d");
    records.reverse();
    let stats = compute_daily(&records);
    assert_eq!(stats.total, 480.0);
    assert_eq!(stats.break_time, 60.0);
}

#[test]
fn test_daily_dangling_entry_counts_nothing() {
    let records = vec![rec("a", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry)];
    let stats = compute_daily(&records);
    assert_eq!(stats.total, 0.0);
    assert_eq!(stats.break_time, 0.0);
}

#[test]
fn test_daily_second_entry_overwrites_first() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 8, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry),
        rec("c", utc_ms(2025, 3, 10, 17, 0), PunchKind::Exit),
    ];
    assert_eq!(compute_daily(&records).total, 480.0);
}

#[test]
fn test_daily_break_without_entry_still_counts_break() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 12, 0), PunchKind::BreakStart),
        rec("b", utc_ms(2025, 3, 10, 12, 45), PunchKind::BreakEnd),
        rec("c", utc_ms(2025, 3, 10, 14, 45), PunchKind::Exit),
    ];
    let stats = compute_daily(&records);
    assert_eq!(stats.break_time, 45.0);
    assert_eq!(stats.total, 120.0);
}

#[test]
fn test_daily_exit_during_break_loses_break() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 12, 0), PunchKind::BreakStart),
        rec("c", utc_ms(2025, 3, 10, 13, 0), PunchKind::Exit),
    ];
    let stats = compute_daily(&records);
    assert_eq!(stats.total, 180.0);
    assert_eq!(stats.break_time, 0.0);
}

#[test]
fn test_daily_keeps_fractional_minutes() {
    let start = utc_ms(2025, 3, 10, 9, 0);
    let records = vec![
        rec("a", start, PunchKind::Entry),
        rec("b", start + 90_000, PunchKind::Exit),
    ];
    assert_eq!(compute_daily(&records).total, 1.5);
}

#[test]
fn test_daily_does_not_touch_input_and_is_repeatable() {
    let mut records = full_day(2025, 3, 10, "d");
    records.swap(0, 3);
    let before = records.clone();

    let first = compute_daily(&records);
    let second = compute_daily(&records);

    assert_eq!(first, second);
    assert_eq!(records, before);
}

#[test]
fn test_daily_balance() {
    let stats = compute_daily(&full_day(2025, 3, 10, "d"));
    assert_eq!(daily_balance(&stats, 420.0), 60.0);
    assert_eq!(daily_balance(&stats, 480.0), 0.0);
}

// ---------------------------
// compute_monthly
// ---------------------------

#[test]
fn test_monthly_two_full_days_balance_zero() {
    let mut records = full_day(2025, 3, 10, "a");
    records.extend(full_day(2025, 3, 11, "b"));

    let stats = compute_monthly_in(&records, ymd(2025, 3, 1), 480.0, &Utc);
    assert_eq!(stats.total_worked, 960.0);
    assert_eq!(stats.total_break, 120.0);
    assert_eq!(stats.days_worked_count, 2);
    assert_eq!(stats.balance, 0.0);
}

#[test]
fn test_monthly_dangling_day_not_charged() {
    let mut records = full_day(2025, 3, 10, "a");
    records.push(rec("x", utc_ms(2025, 3, 12, 9, 0), PunchKind::Entry));

    let stats = compute_monthly_in(&records, ymd(2025, 3, 20), 480.0, &Utc);
    assert_eq!(stats.days_worked_count, 1);
    assert_eq!(stats.balance, 0.0);
}

#[test]
fn test_monthly_ignores_other_months_and_years() {
    let mut records = full_day(2025, 3, 10, "a");
    records.extend(full_day(2025, 4, 1, "b"));
    records.extend(full_day(2024, 3, 10, "c"));

    let stats = compute_monthly_in(&records, ymd(2025, 3, 31), 480.0, &Utc);
    assert_eq!(stats.days_worked_count, 1);
    assert_eq!(stats.total_worked, 480.0);
}

#[test]
fn test_monthly_balance_negative_with_short_day() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 15, 0), PunchKind::Exit),
    ];
    let stats = compute_monthly_in(&records, ymd(2025, 3, 1), 480.0, &Utc);
    assert_eq!(stats.balance, -120.0);
}

#[test]
fn test_monthly_groups_by_local_day_not_by_24h_window() {
    // 20:00 -> 23:59 and 00:01 -> 01:00 local (UTC-3) are two separate days;
    // in UTC the first interval straddles midnight.
    let records = vec![
        rec("a", offset_ms(-3, 2025, 3, 10, 20, 0), PunchKind::Entry),
        rec("b", offset_ms(-3, 2025, 3, 10, 23, 59), PunchKind::Exit),
        rec("c", offset_ms(-3, 2025, 3, 11, 0, 1), PunchKind::Entry),
        rec("d", offset_ms(-3, 2025, 3, 11, 1, 0), PunchKind::Exit),
    ];
    let tz = FixedOffset::west_opt(3 * 3600).expect("offset");

    let stats = compute_monthly_in(&records, ymd(2025, 3, 1), 60.0, &tz);
    assert_eq!(stats.days_worked_count, 2);

    // seen from UTC only the second interval closes on its own day
    let utc_stats = compute_monthly_in(&records, ymd(2025, 3, 1), 60.0, &Utc);
    assert_eq!(utc_stats.days_worked_count, 1);
}

#[test]
fn test_monthly_entry_and_exit_across_midnight_are_split() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 22, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 11, 2, 0), PunchKind::Exit),
    ];
    let stats = compute_monthly_in(&records, ymd(2025, 3, 1), 480.0, &Utc);
    assert_eq!(stats.total_worked, 0.0);
    assert_eq!(stats.days_worked_count, 0);
}

#[test]
fn test_monthly_empty_month() {
    let stats = compute_monthly_in(&[], ymd(2025, 2, 1), 480.0, &Utc);
    assert_eq!(stats.total_worked, 0.0);
    assert_eq!(stats.days_worked_count, 0);
    assert_eq!(stats.balance, 0.0);
}

// ---------------------------
// build_month_rows
// ---------------------------

#[test]
fn test_rows_count_matches_days_in_month() {
    for (month, year, expected) in [(1, 2025, 31), (2, 2025, 28), (2, 2024, 29), (4, 2025, 30)] {
        let rows = build_month_rows_in(&[], month, year, &Utc);
        assert_eq!(rows.len(), expected);
        assert_eq!(rows.len() as u32, days_in_month(month, year));
    }
}

#[test]
fn test_rows_are_ordered_and_dated() {
    let rows = build_month_rows_in(&[], 2, 2025, &Utc);
    assert_eq!(rows[0].day, "01");
    assert_eq!(rows[0].date_full, "01/02/2025");
    assert_eq!(rows[27].day, "28");
    assert_eq!(rows[27].date_full, "28/02/2025");
    assert!(rows.iter().all(|r| r.is_empty() && r.total_hours == "0h 0m"));
}

#[test]
fn test_rows_invalid_month_is_empty() {
    assert!(build_month_rows_in(&[], 13, 2025, &Utc).is_empty());
    assert!(build_month_rows_in(&[], 0, 2025, &Utc).is_empty());
}

#[test]
fn test_rows_full_day_cells() {
    let rows = build_month_rows_in(&full_day(2025, 3, 10, "d"), 3, 2025, &Utc);
    let row = &rows[9];

    assert_eq!(row.date_full, "10/03/2025");
    assert_eq!(row.entry, "09:00");
    assert_eq!(row.break_start, "12:00");
    assert_eq!(row.break_end, "13:00");
    assert_eq!(row.exit, "18:00");
    assert_eq!(row.total_hours, "8h 0m");
}

#[test]
fn test_rows_duplicate_kind_shows_earliest_only() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 8, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 9, 0), PunchKind::Entry),
        rec("c", utc_ms(2025, 3, 10, 17, 0), PunchKind::Exit),
    ];
    let rows = build_month_rows_in(&records, 3, 2025, &Utc);

    // display shows 08:00 while the total is computed from 09:00
    assert_eq!(rows[9].entry, "08:00");
    assert_eq!(rows[9].exit, "17:00");
    assert_eq!(rows[9].total_hours, "8h 0m");
}

#[test]
fn test_rows_missing_kinds_are_blank() {
    let records = vec![rec("a", utc_ms(2025, 3, 10, 9, 5), PunchKind::Entry)];
    let rows = build_month_rows_in(&records, 3, 2025, &Utc);

    assert_eq!(rows[9].entry, "09:05");
    assert_eq!(rows[9].break_start, "");
    assert_eq!(rows[9].exit, "");
    assert_eq!(rows[9].total_hours, "0h 0m");
}

#[test]
fn test_rows_use_local_clock_of_zone() {
    let records = vec![
        rec("a", utc_ms(2025, 3, 10, 12, 0), PunchKind::Entry),
        rec("b", utc_ms(2025, 3, 10, 20, 30), PunchKind::Exit),
    ];
    let tz = FixedOffset::west_opt(3 * 3600).expect("offset");
    let rows = build_month_rows_in(&records, 3, 2025, &tz);

    assert_eq!(rows[9].entry, "09:00");
    assert_eq!(rows[9].exit, "17:30");
    assert_eq!(rows[9].total_hours, "8h 30m");
}

#[test]
fn test_rows_repeatable() {
    let records = full_day(2025, 3, 10, "d");
    assert_eq!(
        build_month_rows_in(&records, 3, 2025, &Utc),
        build_month_rows_in(&records, 3, 2025, &Utc)
    );
}

#[test]
fn test_local_date_key_respects_offset() {
    let ts = utc_ms(2025, 3, 11, 1, 0);
    let west = FixedOffset::west_opt(3 * 3600).expect("offset");

    assert_eq!(local_date_key(ts, &Utc), Some(ymd(2025, 3, 11)));
    assert_eq!(local_date_key(ts, &west), Some(ymd(2025, 3, 10)));
    assert_eq!(local_date_key(i64::MAX, &Utc), None);
}

#[test]
fn test_host_zone_late_and_early_punches_stay_on_their_days() {
    let local = |d: u32, h: u32, m: u32| {
        compose_timestamp(
            ymd(2025, 6, d),
            NaiveTime::from_hms_opt(h, m, 0).expect("valid time"),
            &Local,
        )
        .expect("local time exists")
    };
    let records = vec![
        rec("a", local(10, 22, 0), PunchKind::Entry),
        rec("b", local(10, 23, 59), PunchKind::Exit),
        rec("c", local(11, 0, 1), PunchKind::Entry),
        rec("d", local(11, 1, 0), PunchKind::Exit),
    ];

    let stats = compute_monthly(&records, ymd(2025, 6, 15), 60.0);
    assert_eq!(stats.days_worked_count, 2);
    assert_eq!(stats.total_worked, 119.0 + 59.0);

    let rows = build_month_rows(&records, 6, 2025);
    assert_eq!(rows[9].entry, "22:00");
    assert_eq!(rows[9].exit, "23:59");
    assert_eq!(rows[10].entry, "00:01");
    assert_eq!(rows[10].total_hours, "0h 59m");
}
