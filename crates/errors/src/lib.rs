use thiserror::Error;

pub const INVALID_CRONTAB_INTERVAL: &str = "Invalid crontab interval";

#[derive(Debug, Error)]
pub enum CrontabError {
    #[error("{message}: {interval:?}")]
    InvalidCrontabInterval { interval: String, message: String },
    #[error("interval grammar failed to compile: {0}")]
    Grammar(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CrontabResult<T> = Result<T, CrontabError>;

impl CrontabError {
    pub fn invalid_interval<S: Into<String>>(interval: S) -> Self {
        Self::InvalidCrontabInterval {
            interval: interval.into(),
            message: INVALID_CRONTAB_INTERVAL.to_string(),
        }
    }
    pub fn is_invalid_interval(&self) -> bool {
        matches!(self, CrontabError::InvalidCrontabInterval { .. })
    }
    /// The offending input, exactly as it was handed to the guard.
    pub fn crontab_interval(&self) -> Option<&str> {
        match self {
            CrontabError::InvalidCrontabInterval { interval, .. } => Some(interval),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
