use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Number of days of `month` in `year`; 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Accepts `YYYY-MM-DD` and `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(t, "%d/%m/%Y"))
        .ok()
}

/// Parses a `YYYY-MM` or `MM/YYYY` period into `(month, year)`.
/// `None` selects the current month.
pub fn parse_month_period(p: Option<&str>) -> AppResult<(u32, i32)> {
    let Some(raw) = p else {
        let t = today();
        return Ok((t.month(), t.year()));
    };

    let t = raw.trim();
    let parsed = NaiveDate::parse_from_str(&format!("{t}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("01/{t}"), "%d/%m/%Y"));

    match parsed {
        Ok(d) => Ok((d.month(), d.year())),
        Err(_) => Err(AppError::InvalidPeriod(raw.to_string())),
    }
}

/// Month name as printed on the attendance sheet.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}
