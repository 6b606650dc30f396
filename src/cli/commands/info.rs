use crate::config::Config;
use crate::core::info::InfoLogic;
use crate::errors::AppResult;
use crate::store::open_configured;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_configured(cfg)?;
    InfoLogic::print(&store, &cfg.store_path());
    Ok(())
}
