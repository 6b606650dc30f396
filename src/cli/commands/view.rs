use crate::calendar::CalendarSession;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewLogic;
use crate::errors::{AppError, AppResult};
use crate::store::open_configured;
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        mode,
        date: anchor,
        prev,
        next,
        today,
    } = cmd
    {
        let now = date::today();
        let anchor = match anchor {
            Some(d) if !*today => date::parse_date_arg(d)?,
            _ => now,
        };

        let mut session = CalendarSession::new(
            anchor,
            mode.unwrap_or(cfg.default_view),
            cfg.week_start,
            cfg.default_role,
        );

        if let Some(n) = prev {
            session.shift(-steps("prev", *n)?);
        }
        if let Some(n) = next {
            session.shift(steps("next", *n)?);
        }

        let store = open_configured(cfg)?;
        let window = cfg.hour_window()?;

        print!(
            "{}",
            ViewLogic::render(&session, store.events(), window, cfg.max_chips_per_day, now)
        );

        if !session.capabilities().can_create {
            info(format!("Read-only calendar ({} role).", session.role().as_str()));
        }
    }
    Ok(())
}

/// `--prev`/`--next` count as a signed step count.
fn steps(flag: &str, n: u32) -> AppResult<i32> {
    i32::try_from(n).map_err(|_| AppError::InvalidPeriod(format!("--{flag} {n}: too many steps")))
}
