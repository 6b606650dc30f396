/// ANSI color helper utilities for terminal output.
use crate::models::EventType;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_event_type(t: EventType) -> &'static str {
    match t {
        EventType::Meeting => BLUE,
        EventType::Holiday => RED,
        EventType::Task => GREEN,
        EventType::Reminder => YELLOW,
        EventType::Other => MAGENTA,
    }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Empty values are shown in grey.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
