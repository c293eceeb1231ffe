//! Tests for loading configuration from TOML files and command-line flags.

use clap::Parser;
use std::fs;
use tempfile::TempDir;

use tictac::{Cli, Config, ViewKind};
use tictac_core::StrategyKind;

/// Writes `content` to `tictac.toml` in a fresh directory.
fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictac.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    (dir, path)
}

#[test]
fn test_from_file_reads_all_fields() {
    let (_dir, path) = write_config(
        r#"strategy = "blocking"
view = "coordinates"
seed = 42
"#,
    );

    let config = Config::from_file(&path).expect("Load failed");
    assert_eq!(*config.strategy(), StrategyKind::Blocking);
    assert_eq!(*config.view(), ViewKind::Coordinates);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_from_file_accepts_legacy_names() {
    let (_dir, path) = write_config("strategy = \"stopper\"\nview = \"button\"\n");

    let config = Config::from_file(&path).expect("Load failed");
    assert_eq!(*config.strategy(), StrategyKind::Blocking);
    assert_eq!(*config.view(), ViewKind::Grid);
}

#[test]
fn test_from_file_rejects_unknown_keys() {
    let (_dir, path) = write_config("difficulty = \"hard\"\n");

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_flags_override_file() {
    let (_dir, path) = write_config("strategy = \"blocking\"\nview = \"coordinates\"\nseed = 1\n");
    let path = path.to_str().expect("Temp path is not UTF-8");

    let cli = Cli::try_parse_from(["tictac", "--config", path, "--view", "grid", "--seed", "9"])
        .expect("Arguments rejected");
    let config = Config::load(&cli).expect("Load failed");

    assert_eq!(*config.strategy(), StrategyKind::Blocking);
    assert_eq!(*config.view(), ViewKind::Grid);
    assert_eq!(*config.seed(), Some(9));
}

#[test]
fn test_no_flags_gives_defaults() {
    let cli = Cli::try_parse_from(["tictac"]).expect("Arguments rejected");
    let config = Config::load(&cli).expect("Load failed");

    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_strategy_flag_is_rejected() {
    assert!(Cli::try_parse_from(["tictac", "--strategy", "minimax"]).is_err());
}
