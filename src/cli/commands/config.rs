use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config_edit::edit_file;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            edit_file(&Config::config_file(), editor.as_deref())?;
        }
    }

    Ok(())
}
