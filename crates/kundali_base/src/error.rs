//! Error types for chart input, configuration, and generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from kundali input handling and chart generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KundaliError {
    /// A required form field was blank.
    MissingField(&'static str),
    /// Birth date did not parse.
    InvalidDate(String),
    /// Birth time did not parse.
    InvalidTime(String),
    /// Generator configuration was malformed or out of range.
    Config(String),
    /// I/O error.
    Io(String),
    /// Chart generation did not complete.
    Generation(String),
}

impl Display for KundaliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidDate(msg) => write!(f, "invalid birth date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid birth time: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Generation(msg) => write!(f, "chart generation failed: {msg}"),
        }
    }
}

impl Error for KundaliError {}

impl From<std::io::Error> for KundaliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for KundaliError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            KundaliError::MissingField("name").to_string(),
            "missing required field: name"
        );
        assert_eq!(
            KundaliError::Generation("interrupted".into()).to_string(),
            "chart generation failed: interrupted"
        );
    }

    #[test]
    fn io_conversion() {
        let e: KundaliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, KundaliError::Io(ref m) if m.contains("gone")));
    }
}
