use chrono::Local;

use crate::core::profile::ProfileLogic;
use crate::config::Config;
use crate::core::views::render_status;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;

pub fn handle(cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;
    let mut store = ProfileStore::new(SqliteStore::new(&pool));
    let profile = ProfileLogic::resolve(&mut store, profile)?;

    let records = store.records(&profile.id)?;
    let settings = store.settings(&profile.id)?;

    print!("{}", render_status(&profile, &settings, &records, &Local::now()));
    Ok(())
}
