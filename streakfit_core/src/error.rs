//! Error types for the streakfit_core library.

use crate::types::DayName;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for streakfit_core operations
///
/// These are storage and input faults. Business-rule violations on the
/// completion write path use [`CompleteError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed date string
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Unknown weekday name
    #[error("Unknown weekday: {0}")]
    UnknownDay(String),

    /// Import document is structurally invalid
    #[error("Import failed: {0}")]
    Import(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Failures of the "complete today's workout" command.
///
/// `WrongDay` and `AlreadyCompleted` are expected business outcomes,
/// returned rather than panicked on; `Store` wraps an underlying fault.
#[derive(Debug, thiserror::Error)]
pub enum CompleteError {
    /// Only today's workout may be completed
    #[error("you can only complete {today}'s workout today")]
    WrongDay { today: DayName },

    /// This day was already marked complete today
    #[error("already completed today")]
    AlreadyCompleted,

    /// Underlying storage fault
    #[error(transparent)]
    Store(#[from] Error),
}

impl CompleteError {
    /// True for expected business-rule violations (as opposed to storage faults)
    pub fn is_business(&self) -> bool {
        !matches!(self, CompleteError::Store(_))
    }
}
