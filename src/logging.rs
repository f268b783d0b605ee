use failure::Error;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

// Logs go to stderr only; stdout belongs to whatever build step invoked us.
pub fn logging_config(level: LevelFilter) -> Result<Config, Error> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format_err!("Invalid logging configuration: {}", e))
}

pub fn init_logging(level: LevelFilter) -> Result<(), Error> {
    let config = logging_config(level)?;
    log4rs::init_config(config)?;
    Ok(())
}
