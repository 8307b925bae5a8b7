use regex::{Regex, RegexBuilder};
use tracing::debug;

use crontab_errors::{CrontabError, CrontabResult};

use crate::alias::Alias;
use crate::field::{Field, FieldGrammar};

/// Composite rule accepting a full crontab interval.
///
/// The pattern is assembled once from the per-field grammars and compiled
/// with the `regex` crate, whose automaton-based matching runs in time linear
/// in the input regardless of how the nested list and step groups overlap.
#[derive(Debug, Clone)]
pub struct IntervalGrammar {
    regex: Regex,
}

impl IntervalGrammar {
    pub fn build() -> CrontabResult<Self> {
        let pattern = Self::assemble();
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            // ASCII semantics for \s and case folding.
            .unicode(false)
            .build()
            .map_err(|e| CrontabError::Grammar(e.to_string()))?;

        debug!(pattern_len = pattern.len(), "crontab interval grammar built");

        Ok(Self { regex })
    }

    fn assemble() -> String {
        let fields = Field::ALL
            .iter()
            .map(|field| format!("(?:{})", FieldGrammar::for_field(*field).expression()))
            .collect::<Vec<_>>()
            .join(r"\s+");

        format!(r"^\s*(?:{fields}|(?:{}))\s*$", Alias::alternation())
    }

    /// Source of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, interval: &str) -> bool {
        self.regex.is_match(interval)
    }
}
