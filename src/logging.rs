//! Tracing setup. The terminal belongs to the TUI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "VEHFORM_LOG";

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log file could not be opened.
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returns `~/.local/share/vehform/vehform.log` (or the platform equivalent).
pub fn default_log_path() -> Result<PathBuf, LoggingError> {
    let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(data_dir.join("vehform").join("vehform.log"))
}

/// Builds the filter: `VEHFORM_LOG` when set, otherwise `fallback`.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => Ok(EnvFilter::try_new(directive)?),
        _ => Ok(EnvFilter::try_new(fallback)?),
    }
}

/// Installs a global `fmt` subscriber that appends to `path`.
pub fn init(path: &Path, fallback_filter: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::prelude::*;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(fallback_filter)?)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_filter_parses() {
        // VEHFORM_LOG is not set by the test harness.
        if std::env::var(LOG_ENV).is_err() {
            assert!(build_filter("vehform=debug,warn").is_ok());
        }
    }

    #[test]
    fn bad_fallback_filter_rejected() {
        if std::env::var(LOG_ENV).is_err() {
            assert!(matches!(
                build_filter("vehform=notalevel"),
                Err(LoggingError::Filter(_))
            ));
        }
    }

    #[test]
    fn default_log_path_ends_with_app_file() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("vehform/vehform.log"));
        }
    }
}
