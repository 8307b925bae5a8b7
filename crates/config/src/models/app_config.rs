use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{logging::LoggingConfig, output::OutputConfig};
use crate::validation::ConfigValidator;
use crate::{ConfigError, ConfigResult};

pub const ENV_PREFIX: &str = "CRONTAB_VALIDATOR";

pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["config/crontab-validator.toml", "crontab-validator.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Layers defaults, a TOML file and `CRONTAB_VALIDATOR_*` environment
    /// variables (`__` separates nested keys, e.g.
    /// `CRONTAB_VALIDATOR_LOGGING__LEVEL=debug`).
    ///
    /// The merged result is not validated here; callers apply their own
    /// overrides first and then call [`ConfigValidator::validate`].
    pub fn load(config_path: Option<&str>) -> ConfigResult<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "pretty")?
            .set_default("output.format", "text")?
            .set_default("output.quiet", false)?;

        if let Some(path) = config_path {
            if !Path::new(path).exists() {
                return Err(ConfigError::File(format!("config file not found: {path}")));
            }
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogFormat, LogLevel, OutputFormat};

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_config_from_toml() {
        let toml_str = r#"
[logging]
level = "debug"
format = "json"

[output]
format = "json"
"#;

        let config = AppConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.quiet);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("[output]\nquiet = true\n").unwrap();
        assert!(config.output.quiet);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = AppConfig::from_toml("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = AppConfig::from_toml("[output]\nformat = \"json\"\nquiet = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.logging.level = LogLevel::Error;

        let serialized = config.to_toml().unwrap();
        assert!(serialized.contains("level = \"error\""));
        assert_eq!(AppConfig::from_toml(&serialized).unwrap(), config);
    }
}
