//! Wire models for the SpaceX launches API.
//!
//! Field names match the wire directly (snake_case); unknown response fields
//! are ignored during deserialization.

use serde::Deserialize;

use launchfeed_core::launches::{Links, Patch, RocketLaunch};

/// One element of the `/v5/launches` response array.
#[derive(Debug, Deserialize)]
pub struct LaunchResponse {
    pub flight_number: i64,
    pub name: String,
    pub date_utc: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub links: LinksResponse,
}

/// Nested `links` object within a launch element.
#[derive(Debug, Default, Deserialize)]
pub struct LinksResponse {
    #[serde(default)]
    pub patch: PatchResponse,
    #[serde(default)]
    pub article: Option<String>,
}

/// Nested `links.patch` object.
#[derive(Debug, Default, Deserialize)]
pub struct PatchResponse {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

impl From<LaunchResponse> for RocketLaunch {
    fn from(wire: LaunchResponse) -> Self {
        RocketLaunch {
            flight_number: wire.flight_number,
            mission_name: wire.name,
            details: wire.details,
            launch_date_utc: wire.date_utc,
            launch_success: wire.success,
            links: Links {
                patch: Patch {
                    small: wire.links.patch.small,
                    large: wire.links.patch.large,
                },
                article: wire.links.article,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_launch_element() {
        let json = r#"{
            "flight_number": 1,
            "name": "FalconSat",
            "date_utc": "2006-03-24T22:30:00.000Z",
            "details": "Engine failure at 33 seconds and loss of vehicle",
            "success": false,
            "links": {
                "patch": {
                    "small": "https://images2.imgbox.com/3c/0e/T8iJcSN3_o.png",
                    "large": "https://images2.imgbox.com/40/e3/GypSkayF_o.png"
                },
                "article": "https://www.space.com/2196-spacex-inaugural-falcon-1-rocket-lost-launch.html"
            }
        }"#;

        let wire: LaunchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(wire.flight_number, 1);
        assert_eq!(wire.name, "FalconSat");
        assert_eq!(wire.date_utc, "2006-03-24T22:30:00.000Z");
        assert_eq!(wire.success, Some(false));
        assert_eq!(
            wire.links.patch.small.as_deref(),
            Some("https://images2.imgbox.com/3c/0e/T8iJcSN3_o.png")
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "flight_number": 5,
            "name": "RatSat",
            "date_utc": "2008-09-28T23:15:00.000Z",
            "rocket": "5e9d0d95eda69955f709d1eb",
            "crew": [],
            "links": {"patch": {"small": null, "large": null}, "article": null, "webcast": "x"}
        }"#;

        let wire: LaunchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(wire.flight_number, 5);
        assert_eq!(wire.details, None);
        assert_eq!(wire.success, None);
    }

    #[test]
    fn missing_links_default_to_empty() {
        let json = r#"{"flight_number": 7, "name": "X", "date_utc": "2010-06-04T18:45:00.000Z"}"#;

        let launch: RocketLaunch = serde_json::from_str::<LaunchResponse>(json).unwrap().into();
        assert_eq!(launch.links.patch.small, None);
        assert_eq!(launch.links.patch.large, None);
        assert_eq!(launch.links.article, None);
    }

    #[test]
    fn maps_wire_names_to_domain_names() {
        let json = r#"{
            "flight_number": 4,
            "name": "RatSat",
            "date_utc": "2008-09-28T23:15:00.000Z",
            "success": true,
            "links": {"patch": {"small": null, "large": null}, "article": null}
        }"#;

        let launch: RocketLaunch = serde_json::from_str::<LaunchResponse>(json).unwrap().into();
        assert_eq!(launch.mission_name, "RatSat");
        assert_eq!(launch.launch_date_utc, "2008-09-28T23:15:00.000Z");
        assert_eq!(launch.launch_success, Some(true));
    }
}
