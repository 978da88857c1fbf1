//! Tests for loading configuration files from disk.

use morpion::{MorpionConfig, Rgb};
use morpion_rules::Player;
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = MorpionConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, MorpionConfig::default());
}

#[test]
fn test_file_overrides_are_applied() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
board_size = 300
banner_millis = 500
first_player = "X"

[colors]
background = [0, 0, 0]
"#
    )
    .expect("write config");

    let config = MorpionConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(*config.board_size(), 300);
    assert_eq!(config.banner_duration().as_millis(), 500);
    assert_eq!(*config.first_player(), Player::X);
    assert_eq!(*config.colors().background(), Rgb([0, 0, 0]));
}

#[test]
fn test_present_but_broken_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "board_size = [").expect("write config");

    let err = MorpionConfig::load_or_default(file.path()).expect_err("broken toml");
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
