use std::{fs, path::PathBuf};

use spend_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert_eq!(cfg.rows_per_page, 10);
    assert!(cfg.resolve_data_source().ends_with("SpendDashboard/db.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        data_source: Some(PathBuf::from("/data/db.json")),
        default_user_id: Some(3),
        rows_per_page: 25,
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.resolve_data_source(), PathBuf::from("/data/db.json"));
    assert!(manager.config_path().starts_with(dir.path().join("config")));
}

#[test]
fn missing_config_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));
    assert_eq!(manager.load().expect("defaults"), Config::default());
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"currency": "EUR", "locale": "de-DE"}"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load partial");
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.rows_per_page, 10);
    assert!(loaded.ui_color_enabled);
}
