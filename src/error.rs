//! Error types for the monthcal core.

use thiserror::Error;

/// Errors that can occur in monthcal operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),
}

/// Result type alias for monthcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
