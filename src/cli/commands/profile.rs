use crate::cli::parser::{Commands, ProfileAction};
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::db::profile_store::ProfileStore;
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, RESET};
use crate::utils::table::{Column, Table};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { action } = cmd {
        let pool = open_db(&cfg.database)?;
        let mut store = ProfileStore::new(SqliteStore::new(&pool));

        match action {
            ProfileAction::Create { name } => {
                let p = ProfileLogic::create(&mut store, name)?;
                ttlog_quiet(&pool.conn, "profile", &p.id, "Profile created");
                success(format!("Profile '{}' created (id: {}).", p.name, p.id));
            }
            ProfileAction::Switch { target } => {
                let p = ProfileLogic::switch(&mut store, target)?;
                ttlog_quiet(&pool.conn, "profile", &p.id, "Profile activated");
                success(format!("Active profile: {} ({}).", p.name, p.id));
            }
            ProfileAction::List => {
                let (profiles, active) = ProfileLogic::list(&mut store)?;
                let mut table =
                    Table::new(vec![Column::new(" "), Column::new("Id"), Column::new("Name"), Column::new("Created")]);
                for p in profiles {
                    let marker = if p.id == active { "*" } else { "" };
                    table.add_row(vec![marker.to_string(), p.id, p.name, p.created_at]);
                }
                print!("{}", table.render());
            }
            ProfileAction::Show => {
                let p = ProfileLogic::active(&mut store)?;
                println!("Active profile: {GREEN}{}{RESET} ({})", p.name, p.id);
            }
        }
    }

    Ok(())
}
