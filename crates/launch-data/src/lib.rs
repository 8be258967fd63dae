//! Remote launch data providers.
//!
//! Fetches launch records from external APIs and maps them into the domain
//! entities defined in `launchfeed-core`. Providers expose the launch list as
//! a lazy, single-element stream; nothing touches the network until the
//! stream is polled.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::LaunchDataError;
pub use provider::spacex::SpaceXProvider;
pub use provider::LaunchDataProvider;
