//! Launch domain entities.
//!
//! Immutable value records, constructed fresh on each remote fetch or local
//! read. The flight number is the natural key and must be unique within any
//! launch list.

use serde::{Deserialize, Serialize};

/// One mission's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RocketLaunch {
    /// Natural key; primary key in storage.
    pub flight_number: i64,
    pub mission_name: String,
    pub details: Option<String>,
    /// Launch timestamp as ISO-8601 UTC text, kept verbatim from the wire.
    pub launch_date_utc: String,
    /// `None` means the outcome is unknown or not yet determined.
    pub launch_success: Option<bool>,
    pub links: Links,
}

/// External links attached to a launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    pub patch: Patch,
    pub article: Option<String>,
}

/// Mission patch image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub small: Option<String>,
    pub large: Option<String>,
}
