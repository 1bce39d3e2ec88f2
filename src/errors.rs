use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A distribution or run parameter outside of its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl Error {
    pub fn invalid<V: Display>(name: &'static str, value: V, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_message_names_the_parameter() {
        let err = Error::invalid("p", 1.5, "must lie in [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid parameter `p` = 1.5: must lie in [0, 1]"
        );
    }
}
