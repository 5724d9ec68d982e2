// src/export/mod.rs

mod csv;
mod excel_date;
pub(crate) mod fs_utils;
mod json;
pub mod logic;
mod pdf;
mod pdf_export;
mod xlsx;

pub use csv::write_csv;
pub use logic::{ExportLogic, SheetReport, build_report};
pub use pdf_export::render_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}
