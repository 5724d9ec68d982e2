// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_serial;
use crate::export::logic::SheetReport;
use crate::export::notify_export_success;
use crate::models::day_row::SHEET_HEADERS;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Styled workbook: metadata, banded day rows, totals and fitted column widths.
pub(crate) fn export_xlsx(report: &SheetReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Ponto").map_err(to_export_error)?;

    // ---------------------------
    // Title + metadata
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    let label_format = Format::new().set_bold();

    worksheet
        .write_with_format(0, 0, format!("{} - {}", report.title, report.period), &title_format)
        .map_err(to_export_error)?;

    let mut row: u32 = 2;
    for (label, value) in &report.metadata {
        worksheet
            .write_with_format(row, 0, format!("{label}:"), &label_format)
            .map_err(to_export_error)?;
        worksheet.write(row, 1, value.as_str()).map_err(to_export_error)?;
        row += 1;
    }
    row += 1;

    // ---------------------------
    // Header
    // ---------------------------
    let header_row = row;
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet
        .set_freeze_panes(header_row + 1, 0)
        .map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = SHEET_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Day rows
    // ---------------------------
    for (i, day) in report.rows.iter().enumerate() {
        let r = header_row + 1 + i as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        for (col, value) in day.cells().iter().enumerate() {
            write_xlsx_cell(worksheet, r, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totals
    // ---------------------------
    let mut r = header_row + report.rows.len() as u32 + 2;
    for line in report.totals_lines() {
        worksheet
            .write_with_format(r, 0, line.as_str(), &label_format)
            .map_err(to_export_error)?;
        r += 1;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 4.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Dates and clocks become real Excel values; empty cells stay blank but banded.
fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    if s.is_empty() {
        worksheet.write_blank(row, col, &base).map_err(to_export_error)?;
        return Ok(());
    }

    if let Some((num_format, serial)) = parse_to_excel_serial(s) {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
