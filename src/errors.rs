use failure::Fail;

#[derive(Debug, Fail)]
pub enum BridgeError {
    #[fail(display = "Unable to load configuration from {}: {}", path, reason)]
    ConfigLoad { path: String, reason: String },

    #[fail(display = "Unable to parse trigger source '{}': {}", trigger, reason)]
    SourceParse { trigger: String, reason: &'static str },

    #[fail(display = "HTTP call to {} failed with code: {}", url, status_code)]
    HttpError { url: String, status_code: u16 },

    #[fail(display = "TeamCity returned a build feed that could not be parsed: {}", reason)]
    FeedParse { reason: String },

    #[fail(
        display = "TeamCity returned a response, but no build #{} was found for build type '{}'.",
        number, build_type_id
    )]
    StatusNotFound { build_type_id: String, number: i64 },

    #[fail(display = "Notification was rejected by the service: {}", reason)]
    NotificationRejected { reason: String },
}

impl BridgeError {
    pub fn source_parse(trigger: &str, reason: &'static str) -> BridgeError {
        BridgeError::SourceParse {
            trigger: trigger.to_string(),
            reason: reason,
        }
    }

    pub fn feed_parse<T: ToString>(reason: T) -> BridgeError {
        BridgeError::FeedParse {
            reason: reason.to_string(),
        }
    }
}
