//! Tests for loading engine configuration from disk.

use perfect_tictactoe::{EngineConfig, Player};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer = \"X\"\nshow_score = true").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(config.human(), Player::O);
    assert_eq!(*config.empty_marker(), '_');
    assert!(*config.show_score());
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = EngineConfig::load(None).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer = [").unwrap();

    let err = EngineConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
