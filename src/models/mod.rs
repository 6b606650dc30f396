pub mod display;
pub mod event;
pub mod event_type;
pub mod holiday;
pub mod role;

pub use display::{BusyStatus, Notification, Visibility};
pub use event::{CalendarEvent, EventDraft, EventPatch};
pub use event_type::EventType;
pub use holiday::Holiday;
pub use role::{Capabilities, Role};
