//! Launch data provider contract and implementations.

pub mod spacex;

use futures::stream::BoxStream;

use launchfeed_core::launches::RocketLaunch;

use crate::errors::Result;

/// A remote source of launch records.
pub trait LaunchDataProvider: Send + Sync {
    /// Stable identifier for logging.
    fn id(&self) -> &'static str;

    /// Lazily fetches the latest launch list.
    ///
    /// No request is issued until the stream is polled. The stream then
    /// emits exactly one item (the full list on success, the error
    /// otherwise) and completes. Dropping the stream cancels any in-flight
    /// request.
    fn latest_launches(&self) -> BoxStream<'_, Result<Vec<RocketLaunch>>>;
}
