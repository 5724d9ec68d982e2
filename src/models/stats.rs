use serde::Serialize;

/// Worked and break minutes for one calendar day. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyStats {
    pub total: f64,
    #[serde(rename = "break")]
    pub break_time: f64,
}

/// Month totals and the balance against the daily target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_worked: f64,
    pub total_break: f64,
    pub balance: f64,
    pub days_worked_count: u32,
}
