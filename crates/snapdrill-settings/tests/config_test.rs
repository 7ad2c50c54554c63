// Configuration file tests
// Round trips through both supported formats and the failure paths.

use snapdrill_settings::{Config, SettingsError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.encoder.spindle_power = 75;
    config.encoder.safe_height = 12.5;
    config.encoder.drill_depth = 1.8;
    config.output.directory = Some(PathBuf::from("/srv/cnc"));
    config
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    custom_config().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded, custom_config());
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    custom_config().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded, custom_config());
}

#[test]
fn test_default_toml_has_encoder_section() {
    let text = Config::new().to_toml().unwrap();
    assert!(text.contains("[encoder]"));
    assert!(text.contains("spindle_power = 100"));
    assert!(!text.contains("directory"));
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "encoder: {}").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"encoder": {"drill_depth": -2}}"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Encoder(_)));
}

#[test]
fn test_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[encoder\nsafe_height = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}
