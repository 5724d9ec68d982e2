use chrono::NaiveDate;

use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{HttpSummarizer, summarize_or_fallback};
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_name, parse_month_period};

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let (month, year) = parse_month_period(period.as_deref())?;
        let reference = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidPeriod(format!("{year:04}-{month:02}")))?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let records = store.records(&profile.id)?;
        let settings = store.settings(&profile.id)?;

        let summarizer = HttpSummarizer::from_config(&cfg.summary, reference);
        let runtime = tokio::runtime::Runtime::new()?;
        let text = runtime.block_on(summarize_or_fallback(
            &summarizer,
            &records,
            settings.daily_workload_minutes,
        ));

        println!("=== {} {} | profile: {} ===", month_name(month), year, profile.name);
        println!("{text}");
    }

    Ok(())
}
