use crate::build_status::BuildStatus;
use crate::errors::BridgeError;
use crate::integrations::pushover_response::PushoverResponse;
use crate::integrations::remote_integration::{Notification, NotificationService};
use crate::network::post_form;
use failure::Error;

pub struct PushoverIntegration {
    url: String,
    token: String,
    user: String,
}

impl PushoverIntegration {
    pub fn new(url: &str, token: &str, user: &str) -> PushoverIntegration {
        PushoverIntegration {
            url: url.to_string(),
            token: token.to_string(),
            user: user.to_string(),
        }
    }

    fn form_fields<'a>(&'a self, notification: &'a Notification) -> Vec<(&'a str, &'a str)> {
        let mut fields = vec![
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("message", notification.message.as_str()),
        ];
        if let Some(ref url) = notification.url {
            fields.push(("url", url.as_str()));
        }
        fields
    }
}

impl NotificationService for PushoverIntegration {
    fn send(&self, notification: &Notification) -> Result<(), Error> {
        info!("--Pushover--: Sending '{}'", notification.message);
        let (status_code, body) = post_form(&self.url, &self.form_fields(notification))?;

        let response = serde_json::from_str::<PushoverResponse>(&body).map_err(|e| BridgeError::NotificationRejected {
            reason: format!("HTTP {} with an unreadable body ({})", status_code, e),
        })?;

        if response.is_accepted() {
            info!(
                "--Pushover--: Notification accepted (request {}).",
                response.request.as_deref().unwrap_or("?")
            );
            Ok(())
        } else if response.errors.is_empty() {
            Err(BridgeError::NotificationRejected {
                reason: format!("HTTP {} without a confirming status", status_code),
            }
            .into())
        } else {
            Err(BridgeError::NotificationRejected {
                reason: response.errors.join("; "),
            }
            .into())
        }
    }
}

pub fn compose_message(build_name: &str, status: BuildStatus) -> String {
    match status {
        BuildStatus::Failure => format!("{} : Build Failed!", build_name),
        BuildStatus::Success => format!("{} : Build Succeeded!", build_name),
        BuildStatus::Unknown => format!("{} : Unknown Build Status", build_name),
    }
}

#[cfg(test)]
mod pushover_integration_tests {
    use super::*;
    use wiremock::matchers::{body_string, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn messages_per_status() {
        assert_eq!(compose_message("MyBuild", BuildStatus::Failure), "MyBuild : Build Failed!");
        assert_eq!(compose_message("MyBuild", BuildStatus::Success), "MyBuild : Build Succeeded!");
        assert_eq!(compose_message("MyBuild", BuildStatus::Unknown), "MyBuild : Unknown Build Status");
    }

    #[test]
    fn url_field_only_when_linked() {
        let pushover = PushoverIntegration::new("http://localhost/1/messages.json", "tok", "usr");
        let without_link = Notification {
            message: String::from("m"),
            url: None,
        };
        assert_eq!(
            pushover.form_fields(&without_link),
            vec![("token", "tok"), ("user", "usr"), ("message", "m")]
        );

        let with_link = Notification {
            message: String::from("m"),
            url: Some(String::from("https://ci/x")),
        };
        assert_eq!(pushover.form_fields(&with_link).last(), Some(&("url", "https://ci/x")));
    }

    async fn send_to(server: &MockServer, notification: Notification) -> Result<(), Error> {
        let url = format!("{}/1/messages.json", server.uri());
        tokio::task::spawn_blocking(move || PushoverIntegration::new(&url, "tok", "usr").send(&notification))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn accepted_notification() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/messages.json"))
            .and(body_string(
                "token=tok&user=usr&message=MyBuild+%3A+Build+Failed%21&url=https%3A%2F%2Fci.example.com%2FviewLog%3Fx",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":1,\"request\":\"abc\"}"))
            .expect(1)
            .mount(&server)
            .await;

        let notification = Notification {
            message: compose_message("MyBuild", BuildStatus::Failure),
            url: Some(String::from("https://ci.example.com/viewLog?x")),
        };
        send_to(&server, notification).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rejected_notification_reports_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("user=usr"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string("{\"user\":\"invalid\",\"errors\":[\"user identifier is invalid\"],\"status\":0}"),
            )
            .mount(&server)
            .await;

        let notification = Notification {
            message: String::from("MyBuild : Unknown Build Status"),
            url: None,
        };
        let err = send_to(&server, notification).await.unwrap_err();
        match err.downcast_ref::<BridgeError>() {
            Some(BridgeError::NotificationRejected { reason }) => assert_eq!(reason, "user identifier is invalid"),
            other => panic!("Expected NotificationRejected, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let notification = Notification {
            message: String::from("m"),
            url: None,
        };
        assert!(send_to(&server, notification).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_json_body_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let notification = Notification {
            message: String::from("m"),
            url: None,
        };
        let err = send_to(&server, notification).await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }
}
