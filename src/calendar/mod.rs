//! Calendar grid engine shared by every role's calendar screen.
//!
//! - `composer`   → which dates a view shows
//! - `navigation` → prev / next / today
//! - `binner`     → events onto grid cells (Month, Year)
//! - `layout`     → events onto the time axis (Day, Week)
//! - `session`    → anchor + mode + role capabilities of one screen

pub mod binner;
pub mod composer;
pub mod layout;
pub mod navigation;
pub mod session;
pub mod view_mode;

pub use binner::{BinContext, DayCell};
pub use layout::{DayColumn, HourWindow, TimeBlock};
pub use session::{CalendarSession, DayClick};
pub use view_mode::{ViewMode, WeekStart};
