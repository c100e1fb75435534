//! Integration tests for Settings loading from a global config file
//!
//! These tests point the global layer at temp files; they do not touch the
//! user's real config.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use sagui::application::ApplicationError;
use sagui::config::Settings;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("sagui.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_missing_global_file_when_load_then_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(temp.path().join("absent.toml").as_path())).expect("load");

    assert_eq!(settings.manifest, "package.json");
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
runner = "node"
runner_args = ["./runner.js", "--quiet"]
manifest = "project.json"
"#,
    );

    // Act
    let settings = Settings::load_from(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.manifest, "project.json");
    assert_eq!(
        settings.runner_args,
        vec!["./runner.js".to_string(), "--quiet".to_string()]
    );
}

#[test]
fn given_project_dir_with_tilde_when_load_then_expanded() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, r#"project_dir = "~/code/app""#);

    let settings = Settings::load_from(Some(path.as_path())).expect("load settings");

    let dir = settings.project_dir.expect("project_dir set");
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("code/app"));
}

#[test]
fn given_malformed_config_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "runner = [unterminated");

    let err = Settings::load_from(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_wrong_type_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "runner_args = \"not-a-list\"");

    let result = Settings::load_from(Some(path.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
