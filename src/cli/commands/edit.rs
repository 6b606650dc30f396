use super::{fields_patch, open_audit};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::EventPatch;
use crate::store::open_configured;
use crate::ui::detail::render_detail;
use crate::utils::time::parse_optional_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        start,
        end,
        all_day,
        fields,
    } = cmd
    {
        let patch = EventPatch {
            title: title.clone(),
            start: parse_optional_timestamp(start.as_ref())?,
            end: parse_optional_timestamp(end.as_ref())?,
            all_day: *all_day,
            ..fields_patch(fields)
        };

        let mut store = open_configured(cfg)?;
        let audit = open_audit(cfg);
        let ev = EditLogic::apply(&mut store, &audit, cfg.default_role, id, &patch)?;

        println!();
        print!("{}", render_detail(&ev));
    }

    Ok(())
}
