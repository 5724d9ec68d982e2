use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// The four punch kinds a user can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchKind {
    Entry,
    BreakStart,
    BreakEnd,
    Exit,
}

impl PunchKind {
    pub const ALL: [PunchKind; 4] = [
        PunchKind::Entry,
        PunchKind::BreakStart,
        PunchKind::BreakEnd,
        PunchKind::Exit,
    ];

    /// Wire name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "ENTRY",
            PunchKind::BreakStart => "BREAK_START",
            PunchKind::BreakEnd => "BREAK_END",
            PunchKind::Exit => "EXIT",
        }
    }

    /// Human label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::Entry => "Entry",
            PunchKind::BreakStart => "Break start",
            PunchKind::BreakEnd => "Break end",
            PunchKind::Exit => "Exit",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PunchKind {
    type Err = AppError;

    /// Accepts the wire names plus the short forms used on the command line
    /// (`in`, `out`, `break`, `back`, ...), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "entry" | "in" | "entrada" => Ok(PunchKind::Entry),
            "break_start" | "break" | "lunch" | "bs" => Ok(PunchKind::BreakStart),
            "break_end" | "back" | "resume" | "be" => Ok(PunchKind::BreakEnd),
            "exit" | "out" | "saida" => Ok(PunchKind::Exit),
            _ => Err(AppError::InvalidPunchKind(s.to_string())),
        }
    }
}
