use clap::{Parser, Subcommand};
use crontab_config::{LogFormat, LogLevel, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "crontab-validator")]
#[command(version)]
#[command(about = "Check crontab schedule intervals")]
#[command(
    long_about = "Checks five-field crontab intervals and @-aliases for syntactic validity. \
Exits with 0 when every interval is valid, 1 when any is invalid, 2 on errors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level, overrides configuration
    #[arg(short, long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log format, overrides configuration
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Result format, overrides configuration
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    /// Only print invalid intervals
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate intervals given as arguments
    Check {
        /// Intervals to check; quote each one, e.g. "*/5 * * * *"
        #[arg(required = true)]
        intervals: Vec<String>,
    },
    /// Validate a file with one interval per line ('-' reads stdin)
    File {
        path: String,
    },
    /// List the accepted @-aliases
    Aliases,
}
