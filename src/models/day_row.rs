use serde::{Deserialize, Serialize};

/// One line of the attendance sheet.
///
/// Clock columns hold `HH:MM` or an empty string; `total_hours` is the
/// day's worked time as `"Hh Mm"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    pub day: String,
    #[serde(rename = "dateFull")]
    pub date_full: String,
    #[serde(rename = "entrada")]
    pub entry: String,
    #[serde(rename = "almocoSaida")]
    pub break_start: String,
    #[serde(rename = "almocoVolta")]
    pub break_end: String,
    #[serde(rename = "saida")]
    pub exit: String,
    #[serde(rename = "totalHoras")]
    pub total_hours: String,
}

/// Header for CSV / XLSX / PDF, in column order.
pub const SHEET_HEADERS: [&str; 6] = [
    "Date",
    "Entrada",
    "Saída Almoço",
    "Volta Almoço",
    "Saída",
    "Total Horas",
];

impl DayRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date_full.clone(),
            self.entry.clone(),
            self.break_start.clone(),
            self.break_end.clone(),
            self.exit.clone(),
            self.total_hours.clone(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
            && self.break_start.is_empty()
            && self.break_end.is_empty()
            && self.exit.is_empty()
    }
}
