use crate::config::Config;
use crate::error::VocabError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to the log file; the terminal belongs to the UI.
pub fn init(config: &Config) -> Result<(), VocabError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| {
            VocabError::Logging(format!("{}: {}", config.log_file.display(), e))
        })?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| VocabError::Logging(e.to_string()))
}
