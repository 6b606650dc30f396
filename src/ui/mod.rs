pub mod detail;
pub mod messages;
pub mod render;
