use std::io::BufRead;

use serde::Serialize;

use crontab_errors::CrontabResult;

use crate::validator::CrontabValidator;

/// Outcome for one interval of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalReport {
    /// 1-based line number, or argument position for ad-hoc checks.
    pub line: usize,
    pub interval: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[IntervalReport]) -> Self {
        let valid = reports.iter().filter(|r| r.valid).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Validates one interval per line, skipping blank lines and `#` comments.
pub fn validate_lines<'a, I>(validator: &CrontabValidator, lines: I) -> Vec<IntervalReport>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(idx, line)| IntervalReport {
            line: idx + 1,
            interval: line.to_string(),
            valid: validator.is_interval_valid(line),
        })
        .collect()
}

pub fn validate_reader<R: BufRead>(
    validator: &CrontabValidator,
    reader: R,
) -> CrontabResult<Vec<IntervalReport>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(validate_lines(validator, lines.iter().map(String::as_str)))
}
