use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use stocklist::config::{AppConfig, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let config = AppConfig::load(tmp.path().join("stocklist.json")).expect("load");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.db_path, PathBuf::from("inventory.db"));
    assert!(!config.store_config().unique_names);
    assert_eq!(config.export.sheet_name, "Inventory");
    assert_eq!(config.export.name_column_width, 17.0);
    assert_eq!(config.export.quantity_column_width, 10.0);
}

#[test]
fn partial_file_fills_in_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("stocklist.json");
    fs::write(
        &path,
        r#"{ "unique_names": true, "export": { "name_column_width": 30 } }"#,
    )
    .expect("write");

    let config = AppConfig::load(&path).expect("load");
    assert!(config.store_config().unique_names);
    assert_eq!(config.db_path, PathBuf::from("inventory.db"));
    assert_eq!(config.export.name_column_width, 30.0);
    assert_eq!(config.export.sheet_name, "Inventory");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("stocklist.json");
    fs::write(&path, "{ not json").expect("write");

    assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
}
