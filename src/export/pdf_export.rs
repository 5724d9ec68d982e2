// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::logic::SheetReport;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::day_row::SHEET_HEADERS;
use crate::ui::messages::info;
use std::path::Path;

/// Renders the sheet into PDF bytes.
pub fn render_pdf(report: &SheetReport) -> Vec<u8> {
    let rows: Vec<Vec<String>> = report.rows.iter().map(|r| r.cells()).collect();
    let title = format!("{} - {}", report.title, report.period);

    let mut pdf = PdfManager::new();
    pdf.write_sheet(
        &title,
        &report.metadata,
        &SHEET_HEADERS,
        &rows,
        &report.totals_lines(),
    );
    pdf.finish()
}

pub(crate) fn export_pdf(report: &SheetReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    std::fs::write(path, render_pdf(report))
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
