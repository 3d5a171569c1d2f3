//! Config file loading and saving

use std::fs;

use tempfile::TempDir;
use voxlearn::Config;

#[test]
fn test_missing_project_config_falls_back() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::from_dir(dir.path()).unwrap();

    // Either the user's global config or the defaults; both must validate
    assert!(config.validate().is_ok());
}

#[test]
fn test_project_config_is_preferred() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = Config::project_config_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[voice]\nsensitivity = 1\nauto_start = false\n").unwrap();

    let config = Config::from_dir(dir.path()).unwrap();
    assert_eq!(config.voice.sensitivity.level(), 1);
    assert!(!config.voice.auto_start);
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::with_defaults();
    config.server.port = 8123;
    config.speech.default_voice = "Daniel".to_string();
    config.save_to_file(&path).unwrap();

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded, config);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_invalid_files_are_errors() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let bad_level = dir.path().join("level.toml");
    fs::write(&bad_level, "[voice]\nsensitivity = 6\n").unwrap();
    assert!(Config::from_file(&bad_level).is_err());

    let bad_pitch = dir.path().join("pitch.toml");
    fs::write(&bad_pitch, "[speech]\npitch = 4.5\n").unwrap();
    assert!(Config::from_file(&bad_pitch).is_err());

    let garbage = dir.path().join("garbage.toml");
    fs::write(&garbage, "not = [valid").unwrap();
    assert!(Config::from_file(&garbage).is_err());

    assert!(Config::from_file(&dir.path().join("missing.toml")).is_err());
}
