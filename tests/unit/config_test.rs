//! Loading the startup configuration from disk.

use std::io::Write;

use a11y_overlay::config::{load_config_from, AppConfig, ConfigError};
use a11y_overlay::WidgetVariant;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "window_width = 1024.0\nvariant = \"modern\"\nnumeric_step = 5\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.window_width, 1024.0);
    assert_eq!(config.window_height, 800.0);
    assert_eq!(config.variant, WidgetVariant::Modern);
    assert_eq!(config.numeric_step, 5);
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn test_bad_variant_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "variant = \"retro\"").unwrap();

    assert!(matches!(
        load_config_from(file.path()),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_invalid_step_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "numeric_step = -10").unwrap();

    assert!(matches!(
        load_config_from(file.path()),
        Err(ConfigError::InvalidValue(_))
    ));
}
