//! Terminal views: today's status and the month sheet.

use chrono::{DateTime, TimeZone};

use crate::core::calculator::{build_month_rows_in, compute_daily, compute_monthly_in, daily_balance};
use crate::core::punch::{next_kind, records_on};
use crate::models::day_row::SHEET_HEADERS;
use crate::models::profile::Profile;
use crate::models::punch::PunchRecord;
use crate::models::settings::UserSettings;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date::month_name;
use crate::utils::formatting::{format_hm, format_signed_hm};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

/// Today's punches, worked/break time, balance and the suggested next punch.
pub fn render_status<Tz: TimeZone>(
    profile: &Profile,
    settings: &UserSettings,
    records: &[PunchRecord],
    now: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let tz = now.timezone();
    let today = records_on(records, now.date_naive(), &tz);
    let stats = compute_daily(&today);
    let balance = daily_balance(&stats, settings.daily_workload_minutes);

    let mut out = format!(
        "=== {} | profile: {} ===\n",
        now.date_naive().format("%d/%m/%Y"),
        profile.name
    );

    if today.is_empty() {
        out.push_str("No punches recorded today.\n");
    } else {
        let mut table = Table::new(vec![Column::new("Time"), Column::new("Punch"), Column::new("Note")]);
        for r in &today {
            let clock = r
                .datetime_in(&tz)
                .map(|dt| format_clock(&dt))
                .unwrap_or_default();
            table.add_row(vec![
                clock,
                r.kind.label().to_string(),
                r.note.clone().unwrap_or_default(),
            ]);
        }
        out.push_str(&table.render());
    }

    out.push_str(&format!(
        "\nWorked: {} | Break: {} | Target: {} | Balance: {}{}{}\n",
        format_hm(stats.total),
        format_hm(stats.break_time),
        format_hm(settings.daily_workload_minutes),
        color_for_balance(balance),
        format_signed_hm(balance),
        RESET
    ));
    out.push_str(&format!("Next punch: {}\n", next_kind(&today).label()));
    out
}

/// The attendance sheet of one month followed by its totals.
pub fn render_month<Tz: TimeZone>(
    profile: &Profile,
    settings: &UserSettings,
    records: &[PunchRecord],
    month: u32,
    year: i32,
    tz: &Tz,
) -> String {
    let rows = build_month_rows_in(records, month, year, tz);
    let stats = chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .map(|reference| compute_monthly_in(records, reference, settings.daily_workload_minutes, tz))
        .unwrap_or_default();

    let mut out = format!(
        "=== {} {} | profile: {} ===\n",
        month_name(month),
        year,
        profile.name
    );

    let mut table = Table::new(SHEET_HEADERS.iter().map(|h| Column::new(h)).collect());
    for row in &rows {
        table.add_row(row.cells());
    }
    out.push_str(&table.render());

    out.push_str(&format!(
        "\nDays worked: {} | Worked: {} | Break: {} | Balance: {}{}{}\n",
        stats.days_worked_count,
        format_hm(stats.total_worked),
        format_hm(stats.total_break),
        color_for_balance(stats.balance),
        format_signed_hm(stats.balance),
        RESET
    ));
    out
}
