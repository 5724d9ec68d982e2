use chrono::{Datelike, Local};

use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::models::punch::sorted_by_timestamp;
use crate::utils::date::{month_name, parse_month_period};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let (month, year) = parse_month_period(period.as_deref())?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;
        let records = store.records(&profile.id)?;

        let mut table = Table::new(vec![
            Column::new("Id"),
            Column::new("Date"),
            Column::new("Time"),
            Column::new("Punch"),
            Column::new("Note"),
        ]);

        for r in sorted_by_timestamp(&records) {
            let Some(dt) = r.datetime_in(&Local) else {
                continue;
            };
            if dt.month() != month || dt.year() != year {
                continue;
            }
            table.add_row(vec![
                r.id.clone(),
                dt.format("%d/%m/%Y").to_string(),
                dt.format("%H:%M").to_string(),
                r.kind.as_str().to_string(),
                r.note.clone().unwrap_or_default(),
            ]);
        }

        println!("=== {} {} | profile: {} ===", month_name(month), year, profile.name);
        if table.rows.is_empty() {
            println!("No punches recorded.");
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}
