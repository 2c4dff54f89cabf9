//! Repository Module
//!
//! CRUD over the SQLite tables, one module of free functions per entity.
//! Integrity errors raised by SQLite are classified into [`RepoError`]
//! variants; nothing is retried.

// Staff
pub mod employee;

// Guests
pub mod guest;

// Rooms
pub mod room;
pub mod room_type;

// Bookings
pub mod booking;
pub mod guest_service;
pub mod payment;

// Catalog
pub mod service;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violated
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Delete blocked by rows that still reference this one
    #[error("Protected: {0}")]
    Protected(String),

    /// Foreign key points to a missing row
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// NOT NULL constraint violated
    #[error("Required: {0}")]
    Required(String),

    /// CHECK constraint violated or field-level validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// SQLite extended code raised by `ON DELETE RESTRICT` actions
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

const FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let message = db_err.message().to_string();
            return match db_err.kind() {
                ErrorKind::UniqueViolation => RepoError::Duplicate(message),
                ErrorKind::ForeignKeyViolation => RepoError::InvalidReference(message),
                ErrorKind::NotNullViolation => RepoError::Required(message),
                ErrorKind::CheckViolation => RepoError::Validation(message),
                _ if db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)
                    && message.contains(FOREIGN_KEY_FAILED) =>
                {
                    RepoError::InvalidReference(message)
                }
                _ => RepoError::Database(message),
            };
        }
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            // Values rejected while binding, e.g. money over column precision
            sqlx::Error::Encode(e) => RepoError::Validation(e.to_string()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl RepoError {
    /// Reinterpret a foreign-key failure raised by a DELETE as a protected row
    pub(crate) fn on_delete(self, what: impl FnOnce() -> String) -> Self {
        match self {
            RepoError::InvalidReference(_) => RepoError::Protected(what()),
            other => other,
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
