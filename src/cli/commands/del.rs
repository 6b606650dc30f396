use super::open_audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::open_configured;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        // fail before prompting when the role cannot delete anyway
        cfg.default_role.ensure_can_edit("delete")?;

        let mut store = open_configured(cfg)?;
        let ev = DeleteLogic::find(&store, id)?;

        //
        // Confirmation prompt
        //
        if !*yes
            && !confirm(format!(
                "Delete '{}' on {} ({})? This action is irreversible.",
                ev.title,
                ev.start_date(),
                ev.time_label()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let audit = open_audit(cfg);
        let deleted = DeleteLogic::apply(&mut store, &audit, cfg.default_role, &ev.id)?;
        success(format!("Event '{}' has been deleted.", deleted.title));
    }

    Ok(())
}
