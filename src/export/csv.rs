use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::day_row::{DayRow, SHEET_HEADERS};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// UTF-8 byte order mark, so spreadsheet tools pick the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes BOM, header and one line per day row.
pub fn write_csv<W: Write>(mut out: W, rows: &[DayRow]) -> AppResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = ::csv::Writer::from_writer(out);
    wtr.write_record(SHEET_HEADERS).map_err(csv_error)?;
    for row in rows {
        wtr.write_record(row.cells()).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(rows: &[DayRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(BufWriter::new(file), rows)?;

    notify_export_success("CSV", path);
    Ok(())
}

fn csv_error(e: ::csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}
