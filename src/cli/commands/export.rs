use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::open_configured;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_configured(cfg)?;
        let n = ExportLogic::export(store.events(), *format, file, range, *force)?;

        if n > 0 {
            open_audit(cfg).record(
                "export",
                file,
                &format!("{} events as {}", n, format.as_str()),
            );
        }
    }
    Ok(())
}
