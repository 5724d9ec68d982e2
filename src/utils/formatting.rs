//! Formatting utilities used for CLI and export outputs.
//! Rounding happens here and only here; the calculators keep full precision.

/// Rounds to the nearest whole minute. Non-finite input counts as zero.
fn whole_minutes(mins: f64) -> i64 {
    if mins.is_finite() { mins.round() as i64 } else { 0 }
}

/// `"Hh Mm"`, e.g. 485.4 → `"8h 5m"`. The sign of negative values is dropped.
pub fn format_hm(mins: f64) -> String {
    let m = whole_minutes(mins).abs();
    format!("{}h {}m", m / 60, m % 60)
}

/// Like [`format_hm`] but always signed: `"+1h 30m"`, `"-0h 45m"`, `"0h 0m"`.
pub fn format_signed_hm(mins: f64) -> String {
    let m = whole_minutes(mins);
    let sign = if m > 0 {
        "+"
    } else if m < 0 {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, format_hm(m as f64))
}

/// Longest accepted daily workload, in minutes.
pub const MAX_WORKLOAD_MINUTES: u32 = 24 * 60;

/// Parses a workload such as `480`, `8h`, `7h30m`, `7h 30m`, `45m` or `07:30`
/// into minutes. Minutes next to an hour part must be below 60, and the
/// result may not exceed [`MAX_WORKLOAD_MINUTES`].
pub fn parse_workload(s: &str) -> Option<f64> {
    let t = s.trim().to_lowercase();
    if t.is_empty() {
        return None;
    }

    if let Ok(n) = t.parse::<f64>() {
        return (n.is_finite() && (0.0..=MAX_WORKLOAD_MINUTES as f64).contains(&n)).then_some(n);
    }

    if let Some((h, m)) = t.split_once(':') {
        return hours_and_minutes(h.parse().ok()?, m.parse().ok()?);
    }

    let compact: String = t.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.split_once('h') {
        Some((h, rest)) => {
            let hours: u32 = h.parse().ok()?;
            let minutes: u32 = if rest.is_empty() {
                0
            } else {
                rest.strip_suffix('m')?.parse().ok()?
            };
            hours_and_minutes(hours, minutes)
        }
        None => {
            let minutes: u32 = compact.strip_suffix('m')?.parse().ok()?;
            (minutes <= MAX_WORKLOAD_MINUTES).then_some(minutes as f64)
        }
    }
}

fn hours_and_minutes(hours: u32, minutes: u32) -> Option<f64> {
    if minutes >= 60 {
        return None;
    }
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    (total <= MAX_WORKLOAD_MINUTES).then_some(total as f64)
}
