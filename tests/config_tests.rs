use rschoolcal::calendar::{ViewMode, WeekStart};
use rschoolcal::config::migrate::{EXPECTED_KEYS, migrate, missing_keys};
use rschoolcal::config::{Backend, Config};
use rschoolcal::models::Role;
use rschoolcal::utils::path::resolve_in;
use std::fs;
use std::path::Path;

#[test]
fn test_defaults_are_valid() {
    let cfg = Config::default();

    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.backend, Backend::Json);
    assert_eq!(cfg.week_start, WeekStart::Sunday);
    assert_eq!(cfg.default_role, Role::Admin);
    assert_eq!(cfg.default_view, ViewMode::Month);
    assert_eq!(cfg.max_chips_per_day, 3);
    assert_eq!(cfg.hour_window().unwrap().hours(), 17);
}

#[test]
fn test_invalid_values_are_rejected() {
    let cfg = Config {
        max_chips_per_day: 0,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = Config {
        day_end_hour: 24,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = Config {
        day_start_hour: 18,
        day_end_hour: 8,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = Config {
        store: "  ".into(),
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_partial_yaml_gets_defaults() {
    let yaml = "store: school.json\nweek_start: monday\ndefault_role: parent\n";

    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.store, "school.json");
    assert_eq!(cfg.week_start, WeekStart::Monday);
    assert_eq!(cfg.default_role, Role::Parent);
    assert_eq!(cfg.backend, Backend::Json);
    assert_eq!(cfg.day_start_hour, 7);
    assert_eq!(cfg.day_end_hour, 23);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_yaml_round_trip() {
    let cfg = Config {
        backend: Backend::Sqlite,
        default_role: Role::AdmissionStaff,
        ..Config::default()
    };

    let yaml = serde_yaml::to_string(&cfg).unwrap();
    assert!(yaml.contains("backend: sqlite"));
    assert!(yaml.contains("default_role: admission-staff"));

    let back: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn test_migrate_adds_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rschoolcal.conf");
    fs::write(&path, "store: school.json\nweek_start: monday\n").unwrap();

    let missing = missing_keys(&path).unwrap();
    assert_eq!(missing.len(), EXPECTED_KEYS.len() - 2);
    assert!(missing.contains(&"max_chips_per_day"));

    assert!(migrate(&path).unwrap());
    assert!(dir.path().join("rschoolcal.conf.bak").exists());
    assert!(missing_keys(&path).unwrap().is_empty());

    // existing values survive
    let cfg: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cfg.store, "school.json");
    assert_eq!(cfg.week_start, WeekStart::Monday);

    // second run is a no-op
    assert!(!migrate(&path).unwrap());
}

#[test]
fn test_migrate_without_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!migrate(&dir.path().join("absent.conf")).unwrap());
}

#[test]
fn test_backend_from_extension() {
    assert_eq!(Backend::from_extension("events.sqlite"), Some(Backend::Sqlite));
    assert_eq!(Backend::from_extension("/tmp/cal.DB"), Some(Backend::Sqlite));
    assert_eq!(Backend::from_extension("events.json"), Some(Backend::Json));
    assert_eq!(Backend::from_extension("events.txt"), None);
    assert_eq!(Backend::from_extension("events"), None);
}

#[test]
fn test_relative_store_paths_resolve_in_base() {
    let base = Path::new("/srv/cal");

    assert_eq!(resolve_in(base, "events.json"), base.join("events.json"));
    assert_eq!(resolve_in(base, "/data/events.json"), Path::new("/data/events.json"));
}
