use std::io::Write;

use crontab_config::{
    AppConfig, ConfigError, ConfigValidator, LogFormat, LogLevel, OutputFormat,
};
use tempfile::{Builder, NamedTempFile};

fn toml_file() -> NamedTempFile {
    Builder::new().suffix(".toml").tempfile().unwrap()
}

#[test]
fn test_load_from_explicit_file() {
    let mut file = toml_file();
    writeln!(
        file,
        r#"
[logging]
level = "trace"

[output]
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load(file.path().to_str()).unwrap();
    assert_eq!(config.logging.level, LogLevel::Trace);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_load_missing_file_fails() {
    let err = AppConfig::load(Some("/nonexistent/crontab-validator.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::File(_)));
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let mut file = toml_file();
    writeln!(file, "[logging]\nformat = \"xml\"").unwrap();

    let err = AppConfig::load(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Configuration(_)));
}

#[test]
fn test_load_defers_validation_to_caller() {
    let mut file = toml_file();
    writeln!(file, "[output]\nformat = \"json\"\nquiet = true").unwrap();

    let mut config = AppConfig::load(file.path().to_str()).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.output.format = OutputFormat::Text;
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = AppConfig::load(None).unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.logging.level, LogLevel::Warn);
}
