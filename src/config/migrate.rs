//! Configuration file maintenance: detect keys missing from an older
//! configuration file and fill them with their defaults.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by the current version, in file order.
pub const EXPECTED_KEYS: [&str; 8] = [
    "store",
    "backend",
    "week_start",
    "day_start_hour",
    "day_end_hour",
    "max_chips_per_day",
    "default_role",
    "default_view",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: expected a YAML mapping at top level",
            path.display()
        ))),
    }
}

/// Keys of `EXPECTED_KEYS` absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Print the result of a configuration check. Returns the missing keys.
pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use). Run `init` to create one.",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let missing = missing_keys(path)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!("Missing keys: {}", missing.join(", ")));
        info("Run `config --migrate` to add them with their default values.");
    }
    Ok(missing)
}

/// Add the missing keys with their defaults, keeping every existing value.
/// The previous file is kept as `<name>.bak`. Returns `Ok(false)` when
/// nothing had to change.
pub fn migrate(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        _ => return Err(AppError::ConfigSave),
    };

    let mut current = read_mapping(path)?;
    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            current.insert(k, v.clone());
        }
    }

    // the merged file must still load
    let merged: Config = serde_yaml::from_value(Value::Mapping(current.clone()))
        .map_err(|e| AppError::Config(format!("merged configuration is invalid: {e}")))?;
    merged.validate()?;

    let backup = backup_path(path);
    fs::copy(path, &backup)?;

    let yaml = serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated (added: {}). Previous file saved as {}",
        missing.join(", "),
        backup.display()
    ));
    Ok(true)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rschoolcal.conf".to_string());
    name.push_str(".bak");
    path.with_file_name(name)
}
