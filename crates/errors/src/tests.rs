#[cfg(test)]
mod error_tests {
    use crate::*;

    #[test]
    fn test_crontab_error_display() {
        let invalid = CrontabError::invalid_interval(" abc def hij klm nop ");
        assert_eq!(
            invalid.to_string(),
            "Invalid crontab interval: \" abc def hij klm nop \""
        );

        let grammar = CrontabError::Grammar("unclosed group".to_string());
        assert_eq!(
            grammar.to_string(),
            "interval grammar failed to compile: unclosed group"
        );
    }

    #[test]
    fn test_invalid_interval_carries_input() {
        let err = CrontabError::invalid_interval("60 * * * *");
        assert!(err.is_invalid_interval());
        assert_eq!(err.crontab_interval(), Some("60 * * * *"));

        match err {
            CrontabError::InvalidCrontabInterval { interval, message } => {
                assert_eq!(interval, "60 * * * *");
                assert_eq!(message, INVALID_CRONTAB_INTERVAL);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_input_is_not_trimmed() {
        let err = CrontabError::invalid_interval("  @never  ");
        assert_eq!(err.crontab_interval(), Some("  @never  "));
    }

    #[test]
    fn test_other_variants_have_no_interval() {
        let grammar = CrontabError::Grammar("bad".to_string());
        assert!(!grammar.is_invalid_interval());
        assert_eq!(grammar.crontab_interval(), None);

        let io: CrontabError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(io, CrontabError::Io(_)));
        assert_eq!(io.to_string(), "io error: missing");
    }
}
