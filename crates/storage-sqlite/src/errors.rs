//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap rusqlite and serde_json errors
//! and convert them to the database-agnostic error types defined in
//! `tradejournal_core`.

use rusqlite::ErrorCode;
use thiserror::Error;
use tradejournal_core::errors::{DatabaseError, Error, ValidationError};

/// Storage-specific errors.
///
/// These errors are internal to the storage layer and are converted to
/// `tradejournal_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Stored row is invalid: {0}")]
    InvalidRow(String),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Writer actor is not running")]
    WriterClosed,

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QueryFailed(rusqlite::Error::QueryReturnedNoRows) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(rusqlite::Error::SqliteFailure(failure, message))
                if matches!(
                    failure.code,
                    ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied
                ) =>
            {
                Error::Database(DatabaseError::ConnectionFailed(
                    message.unwrap_or_else(|| failure.to_string()),
                ))
            }
            StorageError::QueryFailed(rusqlite::Error::SqliteFailure(failure, message))
                if failure.code == ErrorCode::DatabaseBusy =>
            {
                Error::Database(DatabaseError::TransactionFailed(
                    message.unwrap_or_else(|| failure.to_string()),
                ))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::SerializationError(e) => {
                Error::Database(DatabaseError::Internal(e.to_string()))
            }
            StorageError::InvalidRow(e) => Error::Validation(ValidationError::InvalidRecord(e)),
            StorageError::LockPoisoned => {
                Error::Database(DatabaseError::Internal("database lock poisoned".to_string()))
            }
            StorageError::WriterClosed => Error::Database(DatabaseError::TransactionFailed(
                "writer actor stopped".to_string(),
            )),
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
        }
    }
}

/// Extension trait for easily converting storage Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, rusqlite::Error>`
/// or `Result<T, serde_json::Error>`, routing the conversion through
/// StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> tradejournal_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, rusqlite::Error> {
    fn into_core(self) -> tradejournal_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, serde_json::Error> {
    fn into_core(self) -> tradejournal_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
