use crate::core::profile::ProfileLogic;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, profile: Option<&str>) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));
        let profile = ProfileLogic::resolve(&mut store, profile)?;

        let prompt = format!(
            "Delete ALL punches of profile '{}'? This action is irreversible.",
            profile.name
        );
        if !*force && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = PunchLogic::clear(&mut store, &profile.id)?;
        ttlog_quiet(
            &pool.conn,
            "clear",
            &profile.id,
            &format!("{removed} punches deleted"),
        );

        success(format!("{removed} punches deleted from '{}'.", profile.name));
    }

    Ok(())
}
