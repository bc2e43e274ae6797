//! Core error types for the trade journal.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from SQLite, serialization, etc.) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::forecast::ForecastError;
use crate::reminders::ReminderError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the journal.
///
/// Database-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Forecast failed: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open the underlying store.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A write transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Schema initialisation failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and ingested records.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A record carries a malformed amount, an unknown kind or a bad timestamp.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
