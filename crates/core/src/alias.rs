use std::fmt;
use std::str::FromStr;

use crontab_errors::CrontabError;

/// `@`-prefixed shorthand standing in for a whole interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    Reboot,
    Yearly,
    Annually,
    Monthly,
    Weekly,
    Daily,
    Midnight,
    Hourly,
}

impl Alias {
    pub const ALL: [Alias; 8] = [
        Alias::Reboot,
        Alias::Yearly,
        Alias::Annually,
        Alias::Monthly,
        Alias::Weekly,
        Alias::Daily,
        Alias::Midnight,
        Alias::Hourly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alias::Reboot => "@reboot",
            Alias::Yearly => "@yearly",
            Alias::Annually => "@annually",
            Alias::Monthly => "@monthly",
            Alias::Weekly => "@weekly",
            Alias::Daily => "@daily",
            Alias::Midnight => "@midnight",
            Alias::Hourly => "@hourly",
        }
    }

    /// Alternation of every alias, as used by the interval grammar.
    pub fn alternation() -> String {
        Alias::ALL
            .iter()
            .map(Alias::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromStr for Alias {
    type Err = CrontabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Alias::ALL
            .into_iter()
            .find(|alias| alias.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CrontabError::invalid_interval(s))
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_from_str() {
        assert_eq!("@daily".parse::<Alias>().unwrap(), Alias::Daily);
        assert_eq!(" @MIDNIGHT ".parse::<Alias>().unwrap(), Alias::Midnight);
        assert_eq!("@Annually".parse::<Alias>().unwrap(), Alias::Annually);

        let err = "@never".parse::<Alias>().unwrap_err();
        assert_eq!(err.crontab_interval(), Some("@never"));
        assert!("daily".parse::<Alias>().is_err());
    }

    #[test]
    fn test_alternation_lists_every_alias() {
        assert_eq!(
            Alias::alternation(),
            "@reboot|@yearly|@annually|@monthly|@weekly|@daily|@midnight|@hourly"
        );
    }
}
