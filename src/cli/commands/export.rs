use chrono::Local;

use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::export::{ExportLogic, build_report};
use crate::utils::date::parse_month_period;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let (month, year) = parse_month_period(period.as_deref())?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let records = store.records(&profile.id)?;
        let settings = store.settings(&profile.id)?;
        let report = build_report(&profile, &settings, &records, month, year, &Local)?;

        let file = expand_tilde(file);
        ExportLogic::export(&pool, &report, *format, &file.to_string_lossy(), *force)?;
    }
    Ok(())
}
