//! Time-accounting engine.
//!
//! Three independent pure functions over an in-memory snapshot of records:
//! the daily interval matcher, the monthly roll-up and the day-row
//! reconstructor used by the exports. None of them fails or mutates its input.

pub mod daily;
pub mod day_rows;
pub mod local_date;
pub mod monthly;

pub use daily::{compute_daily, daily_balance};
pub use day_rows::{build_month_rows, build_month_rows_in};
pub use local_date::local_date_key;
pub use monthly::{compute_monthly, compute_monthly_in};
