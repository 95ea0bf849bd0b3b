//! Custom error types for the common library
//!
//! This module defines the storage error taxonomy shared by every store
//! implementation. Backend-specific failures are classified here so callers
//! only ever match on [`DatabaseError`] variants.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// An insert collided with a unique constraint
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Name of the violated constraint, when the backend reports one
        constraint: String,
    },

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify a query failure, separating unique violations from the rest
    pub fn from_query(err: SqlxError) -> Self {
        let constraint = match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => Some(
                db_err
                    .constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
            _ => None,
        };

        match constraint {
            Some(constraint) => DatabaseError::UniqueViolation { constraint },
            None => DatabaseError::Query(err),
        }
    }

    /// Whether this error is a duplicate-key rejection
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DatabaseError::UniqueViolation { .. })
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
