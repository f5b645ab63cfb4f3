// Logging setup - env_logger behind the log facade

use crate::sketch_config::LoggingConfig;
use crate::sketch_errors::{SketchError, SketchResult};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Where log output goes once the logger is installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    File(String),
    /// Terminal UI without a log file: only errors reach stderr
    ErrorsOnly,
}

/// Pick the log destination for the given configuration
pub fn log_destination(config: &LoggingConfig, tui_active: bool) -> LogDestination {
    match (&config.log_file, tui_active) {
        (Some(path), _) => LogDestination::File(path.clone()),
        (None, true) => LogDestination::ErrorsOnly,
        (None, false) => LogDestination::Stderr,
    }
}

/// Install the global logger. RUST_LOG wins over the configured level.
pub fn init_logging(config: &LoggingConfig, tui_active: bool) -> SketchResult<LogDestination> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.level.as_str()));
    let destination = log_destination(config, tui_active);

    match &destination {
        LogDestination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| SketchError::ConfigError(format!("cannot open log file {}: {}", path, e)))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogDestination::ErrorsOnly => {
            // Anything chattier would scribble over the alternate screen
            builder.filter_level(LevelFilter::Error);
        }
        LogDestination::Stderr => {}
    }

    builder
        .try_init()
        .map_err(|e| SketchError::ConfigError(format!("logger already installed: {}", e)))?;
    Ok(destination)
}
