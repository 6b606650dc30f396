use crate::calendar::{HourWindow, ViewMode, WeekStart};
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::store::EventRepository;
use crate::utils::path::resolve_in;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "RSCHOOLCAL_HOME";

/// Where the event collection lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON array rewritten on every change
    #[default]
    Json,
    /// `events` table in an SQLite file
    Sqlite,
}

impl Backend {
    /// `.sqlite`/`.sqlite3`/`.db` → Sqlite, `.json` → Json.
    pub fn from_extension(path: &str) -> Option<Self> {
        let ext = std::path::Path::new(path).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "sqlite" | "sqlite3" | "db" => Some(Backend::Sqlite),
            "json" => Some(Backend::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,
    #[serde(default = "default_max_chips")]
    pub max_chips_per_day: usize,
    #[serde(default)]
    pub default_role: Role,
    #[serde(default)]
    pub default_view: ViewMode,
}

fn default_day_start_hour() -> u32 {
    7
}
fn default_day_end_hour() -> u32 {
    23
}
fn default_max_chips() -> usize {
    crate::calendar::binner::DEFAULT_MAX_CHIPS
}

pub fn default_store_name(backend: Backend) -> &'static str {
    match backend {
        Backend::Json => "events.json",
        Backend::Sqlite => "events.sqlite",
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::config_dir()
                .join(default_store_name(Backend::Json))
                .to_string_lossy()
                .to_string(),
            backend: Backend::Json,
            week_start: WeekStart::Sunday,
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            max_chips_per_day: default_max_chips(),
            default_role: Role::Admin,
            default_view: ViewMode::Month,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rschoolcal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rschoolcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rschoolcal.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        self.hour_window()?;
        if self.max_chips_per_day == 0 {
            return Err(AppError::Config("max_chips_per_day must be at least 1".into()));
        }
        if self.store.trim().is_empty() {
            return Err(AppError::Config("store path must not be empty".into()));
        }
        Ok(())
    }

    /// Absolute path of the event store (relative paths live in the config dir).
    pub fn store_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.store)
    }

    /// SQLite file holding the audit log. The SQLite backend keeps it next to
    /// the events, the JSON backend in a sibling `*.audit.sqlite` file.
    pub fn audit_path(&self) -> PathBuf {
        let store = self.store_path();
        match self.backend {
            Backend::Sqlite => store,
            Backend::Json => store.with_extension("audit.sqlite"),
        }
    }

    pub fn hour_window(&self) -> AppResult<HourWindow> {
        HourWindow::new(self.day_start_hour, self.day_end_hour)
    }

    /// Initialize configuration and the (empty) event store.
    ///
    /// In test mode the configuration file is not written.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Write config file
        if !is_test {
            self.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let store = self.store_path();
        if !store.exists() {
            let mut repo = crate::store::open_repository(self.backend, &store)?;
            repo.save(&[])?;
        }

        println!("✅ Event store: {:?}", store);

        Ok(())
    }
}
