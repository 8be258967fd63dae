//! Storage error types and conversion into the core error taxonomy.

use thiserror::Error;

use launchfeed_core::errors::{DatabaseError, Error};

/// Errors surfaced by the SQLite storage layer.
///
/// Underlying store errors propagate uncaught; no retry is attempted.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A diesel query or statement failed (constraint violation, I/O, ...)
    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// Could not obtain a pooled connection
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Query(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Pool(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
        }
    }
}
