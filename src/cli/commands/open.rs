use crate::calendar::{CalendarSession, DayClick};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewLogic;
use crate::errors::AppResult;
use crate::store::open_configured;
use crate::ui::messages::info;
use crate::utils::date;

/// Click on a day cell of the default view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { date: day } = cmd {
        let day = date::parse_date_arg(day)?;
        let store = open_configured(cfg)?;

        let mut session =
            CalendarSession::new(day, cfg.default_view, cfg.week_start, cfg.default_role);

        match session.click_day(day, store.events()) {
            DayClick::OpenedDay(_) => {
                let window = cfg.hour_window()?;
                print!(
                    "{}",
                    ViewLogic::render(
                        &session,
                        store.events(),
                        window,
                        cfg.max_chips_per_day,
                        date::today()
                    )
                );
            }
            DayClick::Ignored => info(format!("No events on {}.", day)),
        }
    }
    Ok(())
}
