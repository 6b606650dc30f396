use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        info("Use `log --print` to print the audit log.");
        return Ok(());
    }

    let mut audit = open_audit(cfg);
    let path = audit.path().display().to_string();
    match audit.pool_mut() {
        Some(pool) => LogLogic::print_log(pool)?,
        None => warning(format!("Audit log unavailable at {}", path)),
    }

    Ok(())
}
