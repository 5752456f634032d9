//! Errors that can be returned by this crate

use chrono::NaiveDateTime;
use thiserror::Error;

/// A request that cannot be honoured as-is, and that the user should correct
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("the subject must not be empty")]
    EmptySubject,

    #[error("the end time ({end}) must be after the start time ({start})")]
    EndNotAfterStart { start: NaiveDateTime, end: NaiveDateTime },
}

/// Errors that can happen when reading or writing appointments
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("unable to access the backing file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to (de)serialize appointments: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was caused by an invalid request (rather than a storage failure)
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Whether this error was caused by the backing file, either when accessing it or when (de)serializing its content
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
