use crate::build_status::BuildLookup;
use crate::errors::BridgeError;
use crate::integrations::remote_integration::BuildServer;
use crate::integrations::team_city_response::find_build;
use crate::network::get_url_body;
use failure::Error;

pub struct TeamCityIntegration {
    auth_token: String,
    build_url: String,
}

impl TeamCityIntegration {
    pub fn new(auth_token: &str, build_url: &str) -> TeamCityIntegration {
        TeamCityIntegration {
            auth_token: auth_token.to_string(),
            build_url: build_url.to_string(),
        }
    }
}

impl BuildServer for TeamCityIntegration {
    fn fetch_feed(&self) -> Result<String, Error> {
        info!("--TeamCity--: Fetching build feed from {}", self.build_url);
        get_url_body(&self.build_url, &self.auth_token, "application/xml")
    }
}

/// Fetches the feed and looks up one build in it. A build missing from the feed is
/// not an error here: it comes back as Unknown with no link.
pub fn get_build_status(server: &dyn BuildServer, build_type_id: &str, number: i64) -> Result<BuildLookup, Error> {
    let feed = server.fetch_feed()?;
    match find_build(&feed, build_type_id, number) {
        Ok(lookup) => {
            info!(
                "--TeamCity--: Build {} #{} has status {:?}",
                build_type_id, number, lookup.status
            );
            Ok(lookup)
        }
        Err(not_found @ BridgeError::StatusNotFound { .. }) => {
            warn!("--TeamCity--: {}", not_found);
            Ok(BuildLookup::default())
        }
        Err(other) => Err(other.into()),
    }
}
