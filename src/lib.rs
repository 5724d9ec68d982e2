//! rTimecard library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::logging::enable_logging;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let profile = cli.profile.as_deref();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(&cli.command, cfg, profile),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, profile),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg, profile),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, profile),
        Commands::Status => cli::commands::status::handle(cfg, profile),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg, profile),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, profile),
        Commands::Profile { .. } => cli::commands::profile::handle(&cli.command, cfg),
        Commands::Settings { .. } => cli::commands::settings::handle(&cli.command, cfg, profile),
        Commands::Remind => cli::commands::remind::handle(cfg, profile),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg, profile),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    enable_logging(cli.verbose);

    let mut cfg = Config::load()?;

    // --db wins over the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
