//! Configuration tests
//!
//! Tests for config paths, YAML config loading/saving and CLI merging.

use std::path::PathBuf;

use clap::Parser;
use jotpad::cli::CliArgs;
use jotpad::config_paths;
use jotpad::{EditorConfig, SaveFailurePolicy};
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("jotpad"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.document_path, PathBuf::from("text_editor_content.txt"));
    assert_eq!(config.save_failure, SaveFailurePolicy::Keep);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "document_path: /srv/notes/today.txt\nsave_failure: rollback\n",
    )
    .unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.document_path, PathBuf::from("/srv/notes/today.txt"));
    assert_eq!(config.save_failure, SaveFailurePolicy::Rollback);
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "save_failure: keep\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.document_path, PathBuf::from("text_editor_content.txt"));
    assert_eq!(config.save_failure, SaveFailurePolicy::Keep);
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_load_invalid_yaml_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "save_failure: sometimes\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        document_path: PathBuf::from("journal.txt"),
        save_failure: SaveFailurePolicy::Rollback,
    };

    config.save_to(&path).unwrap();
    let yaml = std::fs::read_to_string(&path).unwrap();
    assert!(yaml.contains("save_failure: rollback"));
    assert_eq!(EditorConfig::load_from(&path), config);
}

// ========================================================================
// CLI Merging Tests
// ========================================================================

#[test]
fn test_cli_config_flag_reads_given_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "document_path: from-config.txt\n").unwrap();

    let args = CliArgs::try_parse_from(["jotpad", "--config", path.to_str().unwrap()]).unwrap();
    let config = args.load_editor_config();
    let startup = args.into_config(config);
    assert_eq!(startup.document_path, PathBuf::from("from-config.txt"));
}

#[test]
fn test_cli_file_flag_wins_over_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "document_path: from-config.txt\n").unwrap();

    let args = CliArgs::try_parse_from([
        "jotpad",
        "-c",
        path.to_str().unwrap(),
        "-f",
        "from-cli.txt",
    ])
    .unwrap();
    let config = args.load_editor_config();
    let startup = args.into_config(config);
    assert_eq!(startup.document_path, PathBuf::from("from-cli.txt"));
}
