#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuildStatus {
    Unknown,
    Success,
    Failure,
}

impl Default for BuildStatus {
    fn default() -> BuildStatus {
        BuildStatus::Unknown
    }
}

impl BuildStatus {
    /// TeamCity reports `SUCCESS` or `FAILURE`; anything else (`ERROR`, `UNKNOWN`, lower case...) is Unknown.
    pub fn from_team_city(status: &str) -> BuildStatus {
        match status {
            "SUCCESS" => BuildStatus::Success,
            "FAILURE" => BuildStatus::Failure,
            _ => BuildStatus::Unknown,
        }
    }
}

/// Result of looking a build up in the feed.
#[derive(Debug, Default, PartialEq)]
pub struct BuildLookup {
    pub status: BuildStatus,
    pub web_url: Option<String>,
}
