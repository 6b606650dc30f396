use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- CHECK ----
        if *check {
            migrate::check(&path)?;
        }

        // ---- MIGRATE ----
        if *run_migrate && migrate::migrate(&path)? {
            open_audit(cfg).record(
                "config_migrate",
                &path.to_string_lossy(),
                "Configuration file migrated",
            );
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }

        if !(*print_config || *check || *run_migrate || *edit_config) {
            info("Use --print, --check, --migrate or --edit.");
        }
    }

    Ok(())
}
