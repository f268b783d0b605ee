mod build_status;
mod config_file;
mod errors;
mod integrations;
mod logging;
mod network;
mod pipeline;
mod trigger_source;
mod url_scrub;

#[macro_use]
extern crate failure;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

use clap::Parser;
use config_file::load_config;
use failure::Error;
use integrations::pushover_integration::PushoverIntegration;
use integrations::team_city_integration::TeamCityIntegration;
use log::LevelFilter;
use pipeline::Outcome;
use std::path::PathBuf;
use std::process;
use trigger_source::parse_source;

lazy_static! {
    static ref HTTP_CLIENT: reqwest::blocking::Client = reqwest::blocking::Client::new();
}

/// Command line application for triggering pushover notifications from teamcity
#[derive(Parser, Debug)]
#[command(name = "rusty_build_notifier", version)]
struct Args {
    /// Build trigger source, e.g. "VCS Trigger; MyBuild, #42"
    #[arg(short, long)]
    source: String,

    /// Whether the output (and notification) should be verbose
    #[arg(short, long)]
    verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logging::init_logging(level) {
        eprintln!("Unable to set up logging: {}", e);
    }

    match run(&args) {
        Ok(Outcome::Notified(status)) => info!("Sent notification for build status {:?}.", status),
        Ok(Outcome::Skipped(status)) => info!("No notification needed for build status {:?}.", status),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Outcome, Error> {
    let config = load_config(&args.config)?;
    let trigger = parse_source(&args.source)?;
    info!(
        "Checking build '{}' #{} (verbose: {})",
        trigger.build_name, trigger.build_number, args.verbose
    );

    let team_city = TeamCityIntegration::new(&config.auth_token, &config.build_url);
    let pushover = PushoverIntegration::new(&config.notif_url, &config.notif_token, &config.notif_user);
    pipeline::run(&config, &trigger, args.verbose, &team_city, &pushover)
}

#[cfg(test)]
mod main_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from(vec!["rusty_build_notifier", "-s", "Reason; MyBuild, foo#42", "-v"]).unwrap();
        assert_eq!(args.source, "Reason; MyBuild, foo#42");
        assert!(args.verbose);
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn source_is_required() {
        assert!(Args::try_parse_from(vec!["rusty_build_notifier", "--verbose"]).is_err());
    }

    #[test]
    fn bad_source_fails_the_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"auth_token = \"\"\nbuild_url = \"http://127.0.0.1:9/builds\"\nnotif_url = \"http://127.0.0.1:9/n\"\nnotif_token = \"\"\nnotif_user = \"\"\n",
        )
        .unwrap();
        let args = Args {
            source: String::from("no separators here"),
            verbose: false,
            config: file.path().to_path_buf(),
        };
        let err = run(&args).unwrap_err();
        assert!(err.downcast_ref::<errors::BridgeError>().is_some());
    }

    #[test]
    fn missing_config_fails_the_run() {
        let args = Args {
            source: String::from("Reason; MyBuild, foo#42"),
            verbose: false,
            config: PathBuf::from("/nonexistent/config.toml"),
        };
        match run(&args).unwrap_err().downcast_ref::<errors::BridgeError>() {
            Some(errors::BridgeError::ConfigLoad { .. }) => {}
            other => panic!("Expected ConfigLoad, got {:?}", other),
        }
    }
}
