use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crontab_config::{AppConfig, ConfigValidator};
use tracing::debug;

use crontab_validator::{logging::init_logging, Application, Cli};

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load configuration from {path}"),
        None => "failed to load configuration".to_string(),
    })?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if let Some(format) = cli.output {
        config.output.format = format;
    }
    if cli.quiet {
        config.output.quiet = true;
    }
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;

    init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let app = Application::new(config.output)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_valid = app.run(&cli.command, &mut out)?;
    out.flush()?;

    Ok(all_valid)
}
