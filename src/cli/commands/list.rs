use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::open_configured;
use crate::ui::messages::info;
use crate::utils::date::{self, month_bounds};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, event_type } = cmd {
        let bounds = resolve_period(period)?;
        let store = open_configured(cfg)?;

        let selected = ListLogic::select(store.events(), bounds, *event_type);

        if selected.is_empty() {
            match bounds {
                Some((from, to)) => info(format!("No events between {} and {}.", from, to)),
                None => info("No events."),
            }
            return Ok(());
        }

        print!("{}", ListLogic::table(&selected).render());
        println!("\n{} event(s)", selected.len());
    }
    Ok(())
}

/// No period → current month; `all` → no bounds.
fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period.as_deref() {
        None => Ok(Some(month_bounds(date::today()))),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => date::parse_period(p).map(Some),
    }
}
