//! Error types for the text-parsing surface.
//!
//! The numeric conversions are total and never fail. Only reading a timestamp
//! out of a string can go wrong, and those failures are reported through
//! [`TimeError`].

use thiserror::Error;

/// Failure while reading a timestamp from text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// The input is not a recognisable ISO 8601 timestamp.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The UTC offset designator is malformed or out of range.
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),
}

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

impl TimeError {
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::ParseError(reason.into())
    }

    pub fn invalid_offset(reason: impl Into<String>) -> Self {
        Self::InvalidOffset(reason.into())
    }
}
