use super::{apply_fields, open_audit};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::EventDraft;
use crate::store::open_configured;
use crate::utils::time::{parse_cli_timestamp, parse_optional_timestamp};

/// Create an event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        start,
        end,
        all_day,
        fields,
    } = cmd
    {
        //
        // 1. Parse start (mandatory) and end (defaults to start)
        //
        let start = parse_cli_timestamp(start)?;
        let end = parse_optional_timestamp(end.as_ref())?.unwrap_or(start);

        //
        // 2. Build the draft
        //
        let mut draft = EventDraft::new(title.clone(), start, end);
        draft.all_day = *all_day;
        apply_fields(&mut draft, fields);

        //
        // 3. Execute logic
        //
        let mut store = open_configured(cfg)?;
        let audit = open_audit(cfg);
        AddLogic::apply(&mut store, &audit, cfg.default_role, draft)?;
    }

    Ok(())
}
