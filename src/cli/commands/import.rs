use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::open_configured;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = open_configured(cfg)?;
        let audit = open_audit(cfg);
        ImportLogic::import(&mut store, &audit, cfg.default_role, Path::new(file))?;
    }
    Ok(())
}
