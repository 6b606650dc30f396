use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let audit = open_audit(cfg);
        BackupLogic::backup(cfg, &audit, file, *compress, *force)?;
    }

    Ok(())
}
