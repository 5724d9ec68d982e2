use chrono::Local;

use crate::core::profile::ProfileLogic;
use crate::config::Config;
use crate::core::reminder::{ReminderLogic, TerminalNotifier};
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;
    let mut store = ProfileStore::new(SqliteStore::new(&pool));
    let profile = ProfileLogic::resolve(&mut store, profile)?;

    let records = store.records(&profile.id)?;
    let settings = store.settings(&profile.id)?;

    let notifier = TerminalNotifier::new(cfg.notifications_enabled);
    let fired = ReminderLogic::run(&notifier, &settings, &records, &Local::now())?;

    if fired == 0 {
        info("No reminders due.");
    }
    Ok(())
}
