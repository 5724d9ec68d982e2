// src/export/logic.rs

use chrono::{NaiveDate, TimeZone};
use std::path::Path;
use tracing::debug;

use crate::core::calculator::{build_month_rows_in, compute_monthly_in};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::day_row::DayRow;
use crate::models::profile::Profile;
use crate::models::punch::PunchRecord;
use crate::models::settings::UserSettings;
use crate::models::stats::MonthlyStats;
use crate::utils::date::month_name;
use crate::utils::formatting::{format_hm, format_signed_hm};

pub const SHEET_TITLE: &str = "Folha de Ponto";

/// Everything an attendance-sheet renderer needs for one month.
#[derive(Debug, Clone)]
pub struct SheetReport {
    pub title: String,
    pub period: String,
    /// `(label, value)` pairs printed above the table.
    pub metadata: Vec<(String, String)>,
    pub rows: Vec<DayRow>,
    pub stats: MonthlyStats,
    pub daily_target_minutes: f64,
}

impl SheetReport {
    /// Totals lines printed below the table.
    pub fn totals_lines(&self) -> Vec<String> {
        vec![
            format!("Dias trabalhados: {}", self.stats.days_worked_count),
            format!("Total trabalhado: {}", format_hm(self.stats.total_worked)),
            format!("Total de intervalos: {}", format_hm(self.stats.total_break)),
            format!("Jornada diária: {}", format_hm(self.daily_target_minutes)),
            format!("Saldo: {}", format_signed_hm(self.stats.balance)),
        ]
    }
}

/// Rows and totals of `month`/`year` plus the profile's report metadata.
pub fn build_report<Tz: TimeZone>(
    profile: &Profile,
    settings: &UserSettings,
    records: &[PunchRecord],
    month: u32,
    year: i32,
    tz: &Tz,
) -> AppResult<SheetReport> {
    let reference = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidPeriod(format!("{year}-{month:02}")))?;

    let rows = build_month_rows_in(records, month, year, tz);
    let stats = compute_monthly_in(records, reference, settings.daily_workload_minutes, tz);
    let period = format!("{} {}", month_name(month), year);

    let employee = if settings.employee_name.trim().is_empty() {
        profile.name.clone()
    } else {
        settings.employee_name.clone()
    };

    let mut metadata = vec![("Colaborador".to_string(), employee)];
    for (label, value) in [
        ("Empresa", &settings.employer),
        ("Cargo", &settings.role),
        ("Matrícula", &settings.registration),
    ] {
        if !value.trim().is_empty() {
            metadata.push((label.to_string(), value.clone()));
        }
    }
    metadata.push(("Período".to_string(), period.clone()));

    Ok(SheetReport {
        title: SHEET_TITLE.to_string(),
        period,
        metadata,
        rows,
        stats,
        daily_target_minutes: settings.daily_workload_minutes,
    })
}

/// Export entry point shared by every format.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `report` to `file` in `format`.
    ///
    /// - `file` must be absolute
    /// - an existing file is only replaced with `force` or after confirmation
    pub fn export(
        pool: &DbPool,
        report: &SheetReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;
        debug!(format = format.as_str(), path = %path.display(), "exporting sheet");

        match format {
            ExportFormat::Csv => export_csv(&report.rows, path)?,
            ExportFormat::Json => export_json(&report.rows, path)?,
            ExportFormat::Xlsx => export_xlsx(report, path)?,
            ExportFormat::Pdf => export_pdf(report, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            file,
            &format!("{} sheet for {}", format.as_str().to_uppercase(), report.period),
        );

        Ok(())
    }
}
