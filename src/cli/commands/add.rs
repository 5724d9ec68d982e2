use chrono::Local;

use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::success;

/// Manual entry of a punch at a chosen date and time.
pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        kind,
        note,
    } = cmd
    {
        // validate everything before touching the store
        let kind: PunchKind = kind.parse()?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let record =
            PunchLogic::add_manual(&mut store, &profile.id, date, time, kind, note.clone(), &Local)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &profile.id,
            &format!("{} on {} {}", record.kind.as_str(), date, time),
        );

        success(format!("{} added on {} at {}", record.kind.label(), date, time));
    }

    Ok(())
}
