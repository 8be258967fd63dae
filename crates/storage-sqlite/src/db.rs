//! Connection pool, embedded migrations, and the write handle.

use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::debug;

use launchfeed_core::errors::{DatabaseError, Error, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Builds an r2d2 pool for `database_url` and applies pending migrations.
///
/// The pool is an externally owned resource: callers hand it to repositories
/// as a constructor argument rather than stashing it in a process-wide
/// singleton.
pub fn create_pool(database_url: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;

    let mut conn = get_connection(&pool)?;
    run_migrations(&mut conn)?;

    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))
}

fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(DatabaseError::Internal(format!("Migration failed: {}", e))))?;
    if !applied.is_empty() {
        debug!("applied {} pending database migrations", applied.len());
    }
    Ok(())
}

/// Executes write jobs off the async runtime, each inside one immediate
/// transaction.
///
/// Taking the SQLite write lock up front means concurrent readers observe
/// either the fully-old or fully-new state of a job, never a partial one; a
/// failing job rolls back completely.
#[derive(Clone)]
pub struct WriteHandle {
    pool: Arc<DbPool>,
}

impl WriteHandle {
    pub fn new(pool: Arc<DbPool>) -> Self {
        WriteHandle { pool }
    }

    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> std::result::Result<T, crate::errors::StorageError>
            + Send
            + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<T> {
            let mut conn = get_connection(&pool)?;
            conn.immediate_transaction(job).map_err(Error::from)
        })
        .await
        .map_err(|e| Error::Database(DatabaseError::Internal(format!("Write job failed: {}", e))))?
    }
}
