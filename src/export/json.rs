use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::day_row::DayRow;
use crate::ui::messages::info;
use std::path::Path;

/// Pretty-printed array of day rows.
pub(crate) fn export_json(rows: &[DayRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
