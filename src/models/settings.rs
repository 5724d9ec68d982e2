use serde::{Deserialize, Serialize};

use super::punch_kind::PunchKind;

pub const DEFAULT_DAILY_WORKLOAD: f64 = 480.0;

fn default_workload() -> f64 {
    DEFAULT_DAILY_WORKLOAD
}

/// Per-profile settings, stored as one JSON blob next to the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_workload")]
    pub daily_workload_minutes: f64,

    // Report metadata printed on exported sheets.
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub registration: String,

    #[serde(default)]
    pub reminders: ReminderTimes,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            daily_workload_minutes: DEFAULT_DAILY_WORKLOAD,
            employee_name: String::new(),
            employer: String::new(),
            role: String::new(),
            registration: String::new(),
            reminders: ReminderTimes::default(),
        }
    }
}

/// Optional `HH:MM` reminder per punch kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
}

impl ReminderTimes {
    pub fn get(&self, kind: PunchKind) -> Option<&str> {
        match kind {
            PunchKind::Entry => self.entry.as_deref(),
            PunchKind::BreakStart => self.break_start.as_deref(),
            PunchKind::BreakEnd => self.break_end.as_deref(),
            PunchKind::Exit => self.exit.as_deref(),
        }
    }

    pub fn set(&mut self, kind: PunchKind, value: Option<String>) {
        let slot = match kind {
            PunchKind::Entry => &mut self.entry,
            PunchKind::BreakStart => &mut self.break_start,
            PunchKind::BreakEnd => &mut self.break_end,
            PunchKind::Exit => &mut self.exit,
        };
        *slot = value;
    }
}
