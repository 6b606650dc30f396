//! Command logic, independent of argument parsing.

pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod import;
pub mod info;
pub mod list;
pub mod log;
pub mod view;
