use crate::ConfigResult;

/// Checks a configuration section after it has been deserialized.
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}
