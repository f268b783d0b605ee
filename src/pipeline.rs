use crate::build_status::BuildStatus;
use crate::config_file::Config;
use crate::integrations::pushover_integration::compose_message;
use crate::integrations::remote_integration::{BuildServer, Notification, NotificationService};
use crate::integrations::team_city_integration::get_build_status;
use crate::trigger_source::TriggerSource;
use crate::url_scrub::scrub_port_from_url;
use failure::Error;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Notified(BuildStatus),
    Skipped(BuildStatus),
}

/// Successful builds are only worth a notification when asked for.
pub fn should_notify(status: BuildStatus, verbose: bool) -> bool {
    verbose || status != BuildStatus::Success
}

pub fn run(
    config: &Config,
    trigger: &TriggerSource,
    verbose: bool,
    server: &dyn BuildServer,
    notifier: &dyn NotificationService,
) -> Result<Outcome, Error> {
    let build_type_id = match config.build_type_id(&trigger.build_name) {
        Some(id) => id,
        None => {
            warn!(
                "--Pipeline--: No mapping for build '{}', it won't match any TeamCity build.",
                trigger.build_name
            );
            ""
        }
    };

    let lookup = get_build_status(server, build_type_id, trigger.build_number)?;
    if !should_notify(lookup.status, verbose) {
        info!(
            "--Pipeline--: {} #{} succeeded, nothing to report.",
            trigger.build_name, trigger.build_number
        );
        return Ok(Outcome::Skipped(lookup.status));
    }

    let notification = Notification {
        message: compose_message(&trigger.build_name, lookup.status),
        url: lookup.web_url.as_ref().map(|web_url| scrub_port_from_url(web_url)),
    };
    notifier.send(&notification)?;
    Ok(Outcome::Notified(lookup.status))
}
