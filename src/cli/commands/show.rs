use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::open_configured;
use crate::ui::detail::render_detail;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = open_configured(cfg)?;

        let ev = store
            .resolve_id(id)?
            .and_then(|full| store.get(&full))
            .ok_or_else(|| AppError::EventNotFound(id.clone()))?;

        print!("{}", render_detail(ev));
    }
    Ok(())
}
