use chrono::Local;

use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::render_month;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::utils::date::parse_month_period;

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Month { period } = cmd {
        let (month, year) = parse_month_period(period.as_deref())?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let records = store.records(&profile.id)?;
        let settings = store.settings(&profile.id)?;

        print!(
            "{}",
            render_month(&profile, &settings, &records, month, year, &Local)
        );
    }

    Ok(())
}
