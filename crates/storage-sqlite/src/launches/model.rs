//! Database row model for the launches table.

use diesel::prelude::*;

use launchfeed_core::launches::{Links, Patch, RocketLaunch};

#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone, PartialEq)]
#[diesel(primary_key(flight_number))]
#[diesel(table_name = crate::schema::launches)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LaunchDB {
    pub flight_number: i64,
    pub mission_name: String,
    pub details: Option<String>,
    pub launch_success: bool,
    pub launch_date_utc: String,
    pub patch_url_small: Option<String>,
    pub patch_url_large: Option<String>,
    pub article_url: Option<String>,
}

impl From<RocketLaunch> for LaunchDB {
    fn from(launch: RocketLaunch) -> Self {
        LaunchDB {
            flight_number: launch.flight_number,
            mission_name: launch.mission_name,
            details: launch.details,
            // The column is non-null: an unknown outcome is stored as false.
            launch_success: launch.launch_success.unwrap_or(false),
            launch_date_utc: launch.launch_date_utc,
            patch_url_small: launch.links.patch.small,
            patch_url_large: launch.links.patch.large,
            article_url: launch.links.article,
        }
    }
}

impl From<LaunchDB> for RocketLaunch {
    fn from(row: LaunchDB) -> Self {
        RocketLaunch {
            flight_number: row.flight_number,
            mission_name: row.mission_name,
            details: row.details,
            launch_date_utc: row.launch_date_utc,
            launch_success: Some(row.launch_success),
            links: Links {
                patch: Patch {
                    small: row.patch_url_small,
                    large: row.patch_url_large,
                },
                article: row.article_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_success_flattens_to_false() {
        let launch = RocketLaunch {
            flight_number: 3,
            mission_name: "Trailblazer".to_string(),
            details: None,
            launch_date_utc: "2008-08-03T03:34:00.000Z".to_string(),
            launch_success: None,
            links: Links::default(),
        };

        let row = LaunchDB::from(launch);
        assert!(!row.launch_success);
    }

    #[test]
    fn row_maps_back_to_domain_entity() {
        let row = LaunchDB {
            flight_number: 1,
            mission_name: "FalconSat".to_string(),
            details: Some("Engine failure at 33 seconds and loss of vehicle".to_string()),
            launch_success: false,
            launch_date_utc: "2006-03-24T22:30:00.000Z".to_string(),
            patch_url_small: Some("https://a/small.png".to_string()),
            patch_url_large: None,
            article_url: Some("https://a/article".to_string()),
        };

        let launch = RocketLaunch::from(row);
        assert_eq!(launch.flight_number, 1);
        assert_eq!(launch.mission_name, "FalconSat");
        assert_eq!(launch.launch_success, Some(false));
        assert_eq!(launch.links.patch.small.as_deref(), Some("https://a/small.png"));
        assert_eq!(launch.links.patch.large, None);
        assert_eq!(launch.links.article.as_deref(), Some("https://a/article"));
    }
}
