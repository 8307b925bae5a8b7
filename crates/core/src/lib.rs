pub mod alias;
pub mod batch;
pub mod field;
pub mod grammar;
pub mod validator;

pub use alias::Alias;
pub use batch::{validate_lines, validate_reader, BatchSummary, IntervalReport};
pub use field::{Field, FieldGrammar};
pub use grammar::IntervalGrammar;
pub use validator::CrontabValidator;

pub use crontab_errors::{CrontabError, CrontabResult, INVALID_CRONTAB_INTERVAL};
