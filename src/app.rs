use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use crontab_config::{OutputConfig, OutputFormat};
use crontab_core::{validate_reader, Alias, BatchSummary, CrontabValidator, IntervalReport};
use serde_json::json;
use tracing::{debug, info};

use crate::cli::Command;

pub struct Application {
    validator: CrontabValidator,
    output: OutputConfig,
}

impl Application {
    pub fn new(output: OutputConfig) -> Result<Self> {
        let validator =
            CrontabValidator::new().context("failed to build crontab interval grammar")?;
        Ok(Self { validator, output })
    }

    /// Runs `command`, writing results to `out`. Returns whether every
    /// interval was valid.
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Check { intervals } => {
                let reports = self.check(intervals);
                self.render(&reports, out)
            }
            Command::File { path } => {
                let reports = self.check_file(path)?;
                self.render(&reports, out)
            }
            Command::Aliases => {
                self.render_aliases(out)?;
                Ok(true)
            }
        }
    }

    fn check(&self, intervals: &[String]) -> Vec<IntervalReport> {
        intervals
            .iter()
            .enumerate()
            .map(|(idx, interval)| IntervalReport {
                line: idx + 1,
                interval: interval.clone(),
                valid: self.validator.is_interval_valid(interval),
            })
            .collect()
    }

    fn check_file(&self, path: &str) -> Result<Vec<IntervalReport>> {
        debug!(path, "reading intervals");
        if path == "-" {
            return validate_reader(&self.validator, io::stdin().lock())
                .context("failed to read intervals from stdin");
        }

        let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
        validate_reader(&self.validator, BufReader::new(file))
            .with_context(|| format!("failed to read intervals from {path}"))
    }

    fn render<W: Write>(&self, reports: &[IntervalReport], out: &mut W) -> Result<bool> {
        let summary = BatchSummary::from_reports(reports);
        info!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            "validation finished"
        );

        match self.output.format {
            OutputFormat::Json => {
                let body = json!({ "results": reports, "summary": summary });
                serde_json::to_writer_pretty(&mut *out, &body)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for report in reports {
                    if report.valid && self.output.quiet {
                        continue;
                    }
                    let status = if report.valid { "valid" } else { "invalid" };
                    writeln!(out, "{}:{status}\t{}", report.line, report.interval)?;
                }
            }
        }

        Ok(summary.all_valid())
    }

    fn render_aliases<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.output.format {
            OutputFormat::Json => {
                let aliases: Vec<&str> = Alias::ALL.iter().map(Alias::as_str).collect();
                serde_json::to_writer_pretty(&mut *out, &aliases)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for alias in Alias::ALL {
                    writeln!(out, "{alias}")?;
                }
            }
        }
        Ok(())
    }
}
