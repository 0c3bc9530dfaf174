//! Error types for wallclock-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Parse error: input '{input}' does not match pattern '{pattern}'")]
    Parse { input: String, pattern: String },

    #[error("Unknown month name: '{0}'")]
    UnknownMonthName(String),

    #[error("Unknown weekday name: '{0}'")]
    UnknownWeekdayName(String),

    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;
