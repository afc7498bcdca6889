// runlog/src/tests/config_tests.rs
use crate::config::{resolve_level, LevelSource, LoggingConfig, DEFAULT_LOG_LEVEL};
use std::fs;
use tempfile::TempDir;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_default_config_values_are_correct() {
    let config = LoggingConfig::default();
    assert_eq!(config.dir_name, "logs");
    assert_eq!(config.level, "info");
    assert_eq!(config.file_name_format, "%m_%d_%Y_%H_%M_%S");
    assert_eq!(config.level_filter(), LevelFilter::INFO);
}

#[test]
fn test_resolve_level_from_config() {
    let (level, source) = resolve_level(Some("DEBUG"));
    assert_eq!(level, LevelFilter::DEBUG);
    assert_eq!(source, LevelSource::Config);
}

#[test]
fn test_resolve_level_case_insensitivity() {
    let (level, source) = resolve_level(Some("tRaCe"));
    assert_eq!(level, LevelFilter::TRACE);
    assert_eq!(source, LevelSource::Config);
}

#[test]
fn test_resolve_level_accepts_long_spellings() {
    assert_eq!(resolve_level(Some("WARNING")).0, LevelFilter::WARN);
    assert_eq!(resolve_level(Some("critical")).0, LevelFilter::ERROR);
}

#[test]
fn test_resolve_level_invalid_falls_back_to_default() {
    let (level, source) = resolve_level(Some("VERY_INVALID_LEVEL"));
    assert_eq!(level, DEFAULT_LOG_LEVEL);
    assert_eq!(source, LevelSource::InvalidConfig);
}

#[test]
fn test_resolve_level_missing_uses_default() {
    let (level, source) = resolve_level(None);
    assert_eq!(level, DEFAULT_LOG_LEVEL);
    assert_eq!(source, LevelSource::Default);
}

#[test]
fn test_config_load_creates_default_when_file_is_missing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("runlog.toml");

    let loaded = LoggingConfig::load(&path).expect("confy должен создать файл с настройками по умолчанию");
    assert_eq!(loaded, LoggingConfig::default());
    assert!(path.exists(), "Файл конфигурации должен был быть создан: {:?}", path);
}

#[test]
fn test_config_load_fills_missing_fields_with_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("runlog.toml");
    fs::write(&path, "level = \"warn\"\n").unwrap();

    let loaded = LoggingConfig::load(&path).expect("Частичный конфиг должен загружаться");
    assert_eq!(loaded.level, "warn");
    assert_eq!(loaded.dir_name, "logs");
    assert_eq!(loaded.file_name_format, "%m_%d_%Y_%H_%M_%S");
    assert_eq!(loaded.level_filter(), LevelFilter::WARN);
}

#[test]
fn test_config_load_rejects_malformed_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("runlog.toml");
    fs::write(&path, "level = [unterminated").unwrap();

    assert!(LoggingConfig::load(&path).is_err());
}
