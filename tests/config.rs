//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use gridpad::config::{EditorConfig, WindowGeometry};
use gridpad::config_paths;
use gridpad::model::ConfigLocation;
use std::path::Path;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_gridpad() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert!(dir.to_string_lossy().contains("gridpad"));
}

#[test]
fn test_user_location_lives_in_config_dir() {
    let Some(config) = config_paths::config_dir() else {
        return;
    };
    let location = ConfigLocation::user();
    assert_eq!(location.config_file, Some(config.join("config.yaml")));
    assert!(location.themes_dir.unwrap().starts_with(&config));
    assert!(location.logs_dir.unwrap().starts_with(&config));
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.theme, "default-dark");
    assert_eq!(config.window, WindowGeometry::default());
    assert!(config.expand_tabs_on_save);
    assert!(!config.open_types.is_empty());
}

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = EditorConfig::default();
    config.set_theme("monokai");
    config.window = WindowGeometry {
        width: 1280,
        height: 720,
        x: 15,
        y: -4,
    };
    config.expand_tabs_on_save = false;
    config.save_to(&path).unwrap();

    let loaded = EditorConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, EditorConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "theme: [unclosed\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "theme: default-light\nfont_size: 14\n").unwrap();

    let loaded = EditorConfig::load_from(&path);
    assert_eq!(loaded.theme, "default-light");
    assert!(loaded.expand_tabs_on_save);
}

#[test]
fn test_open_types_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "open_types:\n  Logs:\n    - \"*.log\"\n    - \"*.out\"\n",
    )
    .unwrap();

    let loaded = EditorConfig::load_from(&path);
    assert_eq!(loaded.open_types.len(), 1);
    assert_eq!(loaded.file_type(Path::new("run.OUT")), Some("Logs"));
    assert_eq!(loaded.file_type(Path::new("run.txt")), None);
}
