use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use launchfeed_core::launches::{LaunchRepositoryTrait, RocketLaunch};
use launchfeed_core::Result;

use super::model::LaunchDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::launches;
use crate::schema::launches::dsl::*;

/// Local data source for launch records.
///
/// The pool and writer are externally owned and injected; the repository
/// holds no other state.
pub struct LaunchRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LaunchRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LaunchRepository { pool, writer }
    }

    pub fn get_all_launches_impl(&self) -> Result<Vec<RocketLaunch>> {
        let mut conn = get_connection(&self.pool)?;
        let launches_db = launches
            .order(flight_number.asc())
            .load::<LaunchDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(launches_db.into_iter().map(RocketLaunch::from).collect())
    }
}

#[async_trait]
impl LaunchRepositoryTrait for LaunchRepository {
    fn get_all_launches(&self) -> Result<Vec<RocketLaunch>> {
        self.get_all_launches_impl()
    }

    async fn clear_and_create_launches(&self, new_launches: Vec<RocketLaunch>) -> Result<usize> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> std::result::Result<usize, StorageError> {
                    diesel::delete(launches::table).execute(conn)?;

                    let rows: Vec<LaunchDB> =
                        new_launches.into_iter().map(LaunchDB::from).collect();
                    let inserted = diesel::insert_into(launches::table)
                        .values(&rows)
                        .execute(conn)?;

                    debug!("replaced launch cache with {} rows", inserted);
                    Ok(inserted)
                },
            )
            .await
    }
}
