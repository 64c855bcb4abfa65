//! Error type for configuration and input parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building a prayer-time configuration out of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Method name not found in the preset table.
    UnknownMethod(String),
    /// Method code outside 1..=7.
    MethodCodeOutOfRange(u8),
    /// Date not in `YYYY-MM-DD` form or out of range.
    InvalidDate(String),
    /// Number or `d:m:s` notation that could not be parsed.
    InvalidNumber(String),
    /// Malformed `prayer:unit:value` adjustment.
    InvalidAdjustment(String),
    /// Unrecognized midnight or high-latitude mode.
    UnknownMode(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(f, "unknown calculation method: {name}"),
            Self::MethodCodeOutOfRange(code) => {
                write!(f, "method code {code} out of range (expected 1-7)")
            }
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidNumber(msg) => write!(f, "invalid number: {msg}"),
            Self::InvalidAdjustment(msg) => write!(f, "invalid adjustment: {msg}"),
            Self::UnknownMode(msg) => write!(f, "unknown mode: {msg}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::MethodCodeOutOfRange(9).to_string(),
            "method code 9 out of range (expected 1-7)"
        );
        assert_eq!(
            ConfigError::UnknownMethod("foo".into()).to_string(),
            "unknown calculation method: foo"
        );
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(ConfigError::InvalidDate("x".into()));
        assert!(e.to_string().contains("invalid date"));
    }
}
