use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn test_load_existing_file_and_missing_file() {
    let dir = tempdir().expect("create temp dir");
    let mut cfg = Config::default();
    cfg.logging.level = LogLevel::Debug;
    cfg.hashing.normalization = Normalization::Nfc;
    cfg.feed.default_limit = 5;

    let config_path = dir.path().join("cfg.toml");
    fs::write(&config_path, cfg.to_toml_string().expect("serialize config")).unwrap();

    let loaded = Config::load(&config_path).expect("load existing config");
    assert_eq!(loaded, cfg);

    // Nonexistent file should fall back to defaults
    let missing_path = dir.path().join("missing.toml");
    let default_loaded = Config::load(&missing_path).expect("load missing");
    assert_eq!(default_loaded, Config::default());
}

#[test]
#[serial]
fn test_partial_file_uses_section_defaults() {
    let dir = tempdir().expect("create temp dir");
    let config_path = dir.path().join("partial.toml");
    fs::write(&config_path, "[hashing]\nbackend = \"sha2\"\n").unwrap();

    let loaded = Config::load(&config_path).expect("load partial config");
    assert_eq!(loaded.hashing.backend, HashBackendKind::Sha2);
    assert_eq!(loaded.hashing.normalization, Normalization::None);
    assert_eq!(loaded.feed, FeedConfig::default());
}

#[test]
#[serial]
fn test_load_invalid_toml_fails() {
    let dir = tempdir().expect("create temp dir");
    let invalid_path = dir.path().join("bad.toml");
    fs::write(&invalid_path, "not = [valid\n").unwrap();

    let err = Config::load(&invalid_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(format!("{}", err).contains("Failed to parse configuration"));
}

#[test]
#[serial]
fn test_unreadable_path_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    // A directory exists but cannot be read as a file.
    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
#[serial]
fn test_unknown_field_rejected() {
    assert!(matches!(
        Config::from_toml_str("[hashing]\nalgorithm = \"md5\"\n"),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
#[serial]
fn test_apply_env_vars() {
    std::env::set_var("DJ_LOGGING_LEVEL", "debug");
    std::env::set_var("DJ_HASHING_NORMALIZATION", "nfc");
    std::env::set_var("DJ_FEED_MAX_LIMIT", "40");
    let mut cfg = Config::default();
    cfg.apply_env_vars().unwrap();
    assert_eq!(cfg.logging.level, LogLevel::Debug);
    assert_eq!(cfg.hashing.normalization, Normalization::Nfc);
    assert_eq!(cfg.feed.max_limit, 40);
    std::env::remove_var("DJ_LOGGING_LEVEL");
    std::env::remove_var("DJ_HASHING_NORMALIZATION");
    std::env::remove_var("DJ_FEED_MAX_LIMIT");

    std::env::set_var("DJ_HASHING_BACKEND", "md5");
    let mut cfg = Config::default();
    let err = cfg.apply_env_vars().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    std::env::remove_var("DJ_HASHING_BACKEND");
}

#[test]
#[serial]
fn test_env_override_can_fail_validation() {
    let dir = tempdir().expect("create temp dir");
    std::env::set_var("DJ_FEED_DEFAULT_LIMIT", "0");
    let result = Config::load(dir.path().join("none.toml"));
    std::env::remove_var("DJ_FEED_DEFAULT_LIMIT");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
