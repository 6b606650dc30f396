//! Event detail panel (what opens when an event is clicked).

use crate::models::CalendarEvent;
use crate::utils::colors::{BOLD, RESET, color_for_event_type, colorize_optional, paint};
use crate::utils::time::format_minutes;

const WRAP_WIDTH: usize = 64;

pub fn render_detail(ev: &CalendarEvent) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{BOLD}{}{RESET}  {}\n",
        ev.title,
        paint(color_for_event_type(ev.event_type), &format!("[{}]", ev.event_type.as_str()))
    ));
    out.push_str(&format!("  id           : {}\n", ev.id));

    if ev.all_day {
        if ev.start_date() == ev.end_date() {
            out.push_str(&format!("  when         : {} (all day)\n", ev.start_date()));
        } else {
            out.push_str(&format!(
                "  when         : {} → {} (all day)\n",
                ev.start_date(),
                ev.end_date()
            ));
        }
    } else {
        out.push_str(&format!("  start        : {}\n", ev.start_str()));
        out.push_str(&format!("  end          : {}\n", ev.end_str()));
        out.push_str(&format!(
            "  duration     : {}\n",
            format_minutes(ev.duration_minutes())
        ));
    }

    out.push_str(&format!("  location     : {}\n", colorize_optional(&ev.location)));
    out.push_str(&format!("  attendees    : {}\n", colorize_optional(&ev.attendees)));
    out.push_str(&format!("  visibility   : {}\n", ev.visibility.as_str()));
    out.push_str(&format!("  show as      : {}\n", ev.busy_status.as_str()));
    out.push_str(&format!("  notification : {}\n", ev.notification.as_str()));

    if ev.description.trim().is_empty() {
        out.push_str(&format!("  description  : {}\n", colorize_optional("")));
    } else {
        out.push_str("  description  :\n");
        for line in textwrap::wrap(ev.description.trim(), WRAP_WIDTH) {
            out.push_str(&format!("    {}\n", line));
        }
    }

    out
}
