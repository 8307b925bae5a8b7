use serde::{Deserialize, Serialize};

use crate::validation::ConfigValidator;

/// How validation results are printed to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {s}. Valid formats: text, json")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Only report invalid intervals.
    pub quiet: bool,
}

impl ConfigValidator for OutputConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        if self.quiet && self.format == OutputFormat::Json {
            return Err(crate::ConfigError::Validation(
                "quiet output is only supported with the text format".to_string(),
            ));
        }
        Ok(())
    }
}
