/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    if rounded > 0.0 {
        GREEN
    } else if rounded < 0.0 {
        RED
    } else {
        RESET
    }
}
