use async_trait::async_trait;

use super::RocketLaunch;
use crate::errors::Result;

/// Contract for the local launch cache.
///
/// Reads are synchronous against the store. Writes go through the storage
/// writer and replace the cached list wholesale; there is no merge or
/// incremental update.
#[async_trait]
pub trait LaunchRepositoryTrait: Send + Sync {
    /// Returns all cached launches, ordered by flight number.
    fn get_all_launches(&self) -> Result<Vec<RocketLaunch>>;

    /// Atomically deletes every cached launch and inserts `launches` in its
    /// place, within one transaction. On failure the prior rows remain
    /// untouched. Returns the number of rows inserted.
    async fn clear_and_create_launches(&self, launches: Vec<RocketLaunch>) -> Result<usize>;
}
