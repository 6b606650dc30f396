//! Display-only event attributes. They are stored and shown, nothing else:
//! no behaviour (and no notification delivery) hangs off them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BusyStatus {
    #[default]
    Busy,
    Free,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Notification {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "at-time")]
    AtTime,
    #[value(name = "5m")]
    #[serde(rename = "5m")]
    Minutes5,
    #[default]
    #[value(name = "15m")]
    #[serde(rename = "15m")]
    Minutes15,
    #[value(name = "30m")]
    #[serde(rename = "30m")]
    Minutes30,
    #[value(name = "1h")]
    #[serde(rename = "1h")]
    Hour1,
    #[value(name = "1d")]
    #[serde(rename = "1d")]
    Day1,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }

    pub fn parse_lenient(s: &str) -> Option<Self> {
        Self::from_str(s.trim(), true).ok()
    }
}

impl BusyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusyStatus::Busy => "Busy",
            BusyStatus::Free => "Free",
        }
    }

    pub fn parse_lenient(s: &str) -> Option<Self> {
        Self::from_str(s.trim(), true).ok()
    }
}

impl Notification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notification::None => "none",
            Notification::AtTime => "at-time",
            Notification::Minutes5 => "5m",
            Notification::Minutes15 => "15m",
            Notification::Minutes30 => "30m",
            Notification::Hour1 => "1h",
            Notification::Day1 => "1d",
        }
    }

    /// Accepts the CLI names plus the labels the old web forms stored
    /// ("15 minutes before", "1 hour before", ...).
    pub fn parse_lenient(s: &str) -> Option<Self> {
        if let Ok(n) = Self::from_str(s.trim(), true) {
            return Some(n);
        }

        let lower = s.trim().to_lowercase();
        let compact: String = lower.split_whitespace().collect::<Vec<_>>().join(" ");
        match compact.as_str() {
            "" | "no notification" => Some(Self::None),
            "at time of event" | "at time" => Some(Self::AtTime),
            "5 minutes before" => Some(Self::Minutes5),
            "15 minutes before" => Some(Self::Minutes15),
            "30 minutes before" => Some(Self::Minutes30),
            "1 hour before" => Some(Self::Hour1),
            "1 day before" => Some(Self::Day1),
            _ => None,
        }
    }
}
