use once_cell::sync::OnceCell;
use tracing::debug;

use crontab_errors::{CrontabError, CrontabResult};

use crate::grammar::IntervalGrammar;

static SHARED: OnceCell<CrontabValidator> = OnceCell::new();

/// Checks strings against the crontab interval grammar.
///
/// The grammar is built in [`CrontabValidator::new`] and never changes
/// afterwards; the validator is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone)]
pub struct CrontabValidator {
    grammar: IntervalGrammar,
}

impl CrontabValidator {
    pub fn new() -> CrontabResult<Self> {
        Ok(Self {
            grammar: IntervalGrammar::build()?,
        })
    }

    /// Process-wide validator, built on first use.
    pub fn shared() -> CrontabResult<&'static CrontabValidator> {
        SHARED.get_or_try_init(Self::new)
    }

    pub fn grammar(&self) -> &IntervalGrammar {
        &self.grammar
    }

    pub fn is_interval_valid(&self, crontab_interval: &str) -> bool {
        self.grammar.is_match(crontab_interval)
    }

    pub fn guard_interval_is_valid(&self, crontab_interval: &str) -> CrontabResult<()> {
        if !self.is_interval_valid(crontab_interval) {
            debug!(interval = crontab_interval, "rejected crontab interval");
            return Err(CrontabError::invalid_interval(crontab_interval));
        }

        Ok(())
    }
}
