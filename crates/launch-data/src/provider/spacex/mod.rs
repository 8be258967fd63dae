//! SpaceX launches provider.
//!
//! Fetches the full launch list from the public SpaceX v5 API. No API key or
//! authentication required; the endpoint takes no query parameters.

use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use log::{debug, warn};
use reqwest::Client;

use launchfeed_core::launches::RocketLaunch;

use crate::errors::{LaunchDataError, Result};
use crate::models::LaunchResponse;
use crate::provider::LaunchDataProvider;

const PROVIDER_ID: &str = "SPACEX";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const BASE_URL: &str = "https://api.spacexdata.com";
const LAUNCHES_PATH: &str = "/v5/launches";

/// Provider backed by the SpaceX v5 REST API.
pub struct SpaceXProvider {
    client: Client,
    base_url: String,
}

impl SpaceXProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Points the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut provider = Self::new();
        provider.base_url = base_url.into();
        provider
    }

    async fn fetch_latest(&self) -> Result<Vec<RocketLaunch>> {
        let url = format!("{}{}", self.base_url, LAUNCHES_PATH);
        debug!("{}: GET {}", PROVIDER_ID, url);

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{}: launches request failed with HTTP {}", PROVIDER_ID, status);
            let message = resp.text().await.unwrap_or_default();
            return Err(LaunchDataError::api(status.as_u16(), message));
        }

        let body = resp.text().await?;
        let wire: Vec<LaunchResponse> = serde_json::from_str(&body)?;
        debug!("{}: fetched {} launches", PROVIDER_ID, wire.len());

        Ok(wire.into_iter().map(RocketLaunch::from).collect())
    }
}

impl Default for SpaceXProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchDataProvider for SpaceXProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn latest_launches(&self) -> BoxStream<'_, Result<Vec<RocketLaunch>>> {
        stream::once(self.fetch_latest()).boxed()
    }
}
