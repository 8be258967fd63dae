//! SQLite-backed storage for the launchfeed data layer.
//!
//! Wraps a diesel connection pool behind repositories implementing the
//! contracts in `launchfeed-core`. Migrations are embedded and applied when
//! the pool is created. Reads run on the caller's thread; writes go through
//! [`db::WriteHandle`], one transaction per job.

pub mod db;
pub mod errors;
pub mod launches;
pub mod schema;

pub use db::{create_pool, get_connection, DbPool, WriteHandle};
pub use errors::StorageError;
pub use launches::{LaunchDB, LaunchRepository};
