use crate::build_status::{BuildLookup, BuildStatus};
use crate::errors::BridgeError;
use crate::trigger_source::parse_leading_int;

/// A `<build>` element from TeamCity's `/app/rest/builds` feed.
#[derive(Debug, PartialEq)]
pub struct TeamCityBuild<'a> {
    pub build_type_id: &'a str,
    pub number: &'a str,
    pub status: &'a str,
    pub web_url: &'a str,
}

impl<'a> TeamCityBuild<'a> {
    fn from_node(node: roxmltree::Node<'a, '_>) -> Result<TeamCityBuild<'a>, BridgeError> {
        let attribute = |name: &'static str| {
            node.attribute(name).ok_or_else(|| {
                BridgeError::feed_parse(format!(
                    "<build> at byte {} is missing the '{}' attribute",
                    node.range().start,
                    name
                ))
            })
        };

        Ok(TeamCityBuild {
            build_type_id: attribute("buildTypeId")?,
            number: attribute("number")?,
            status: attribute("status")?,
            web_url: attribute("webUrl")?,
        })
    }

    pub fn matches(&self, build_type_id: &str, number: i64) -> bool {
        self.build_type_id == build_type_id && parse_leading_int(self.number) == number
    }
}

/// Every `<build>` under the `<builds>` root, in document order.
pub fn parse_builds<'a>(document: &'a roxmltree::Document<'_>) -> Result<Vec<TeamCityBuild<'a>>, BridgeError> {
    let root = document.root_element();
    if !root.has_tag_name("builds") {
        return Err(BridgeError::feed_parse(format!(
            "expected a <builds> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    root.children()
        .filter(|node| node.has_tag_name("build"))
        .map(TeamCityBuild::from_node)
        .collect()
}

/// Finds the first build in the feed with the given type and number.
///
/// A feed that doesn't parse, or has a build missing one of its attributes, is a
/// `FeedParse` error. A well-formed feed without the build is `StatusNotFound`.
pub fn find_build(feed: &str, build_type_id: &str, number: i64) -> Result<BuildLookup, BridgeError> {
    let document = roxmltree::Document::parse(feed).map_err(BridgeError::feed_parse)?;
    let builds = parse_builds(&document)?;
    debug!("--TeamCity--: Feed contains {} builds.", builds.len());

    match builds.iter().find(|build| build.matches(build_type_id, number)) {
        Some(build) => Ok(BuildLookup {
            status: BuildStatus::from_team_city(build.status),
            web_url: Some(build.web_url.to_string()),
        }),
        None => Err(BridgeError::StatusNotFound {
            build_type_id: build_type_id.to_string(),
            number: number,
        }),
    }
}
