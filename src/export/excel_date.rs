// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial value of a sheet cell: `DD/MM/YYYY` dates and `HH:MM` clocks.
/// Anything else stays text.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return excel_epoch().map(|epoch| ("dd/mm/yyyy", (d - epoch).num_days() as f64));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}
