//! Error taxonomy shared across the launchfeed data layer.

use thiserror::Error;

/// Result type alias used throughout the data layer.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for data layer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Local store failure, surfaced by the storage crate.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Remote fetch failure, surfaced by a launch data provider.
    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Failures originating in the local store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not obtain a connection from the pool.
    #[error("Failed to get database connection: {0}")]
    ConnectionFailed(String),

    /// A query or statement failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Anything else (migrations, panicked write jobs).
    #[error("{0}")]
    Internal(String),
}
