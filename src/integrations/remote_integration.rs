use failure::Error;

/// Somewhere the build-status feed can be read from.
pub trait BuildServer {
    fn fetch_feed(&self) -> Result<String, Error>;
}

/// A push message, composed from the build result.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub url: Option<String>,
}

pub trait NotificationService {
    fn send(&self, notification: &Notification) -> Result<(), Error>;
}
