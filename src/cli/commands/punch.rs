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

/// Records a punch at the current local time.
pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Punch { kind, note } = cmd {
        let kind = kind.as_deref().map(str::parse::<PunchKind>).transpose()?;

        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let now = Local::now();
        let record = PunchLogic::punch(&mut store, &profile.id, kind, &now, note.clone())?;

        ttlog_quiet(
            &pool.conn,
            "punch",
            &profile.id,
            &format!("{} at {}", record.kind.as_str(), now.format("%Y-%m-%d %H:%M")),
        );

        success(format!(
            "{} recorded at {} ({})",
            record.kind.label(),
            now.format("%H:%M"),
            profile.name
        ));
    }

    Ok(())
}
