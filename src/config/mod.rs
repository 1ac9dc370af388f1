//! Application configuration loaded from `config.json`.
//!
//! The file lives at `~/.config/vehform/config.json`. It is optional; any
//! key left out takes its default.

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

pub use error::ConfigError;

/// Default URL that vehicles are posted to.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/vehicles/";

/// Runtime settings for the form client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL that `POST` submissions are sent to.
    pub endpoint: String,
    /// URL listed with `GET` for the Metrics tab; falls back to `endpoint`.
    pub list_endpoint: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `tracing` filter directive used when `VEHFORM_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            list_endpoint: None,
            timeout_secs: 10,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the XDG config directory, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path()?)
    }

    /// Loads the config from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the URL used to list stored vehicles.
    pub fn list_endpoint(&self) -> &str {
        self.list_endpoint.as_deref().unwrap_or(&self.endpoint)
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.endpoint)?;
        if let Some(list) = &self.list_endpoint {
            validate_endpoint(list)?;
        }
        Ok(())
    }
}

/// Returns `~/.config/vehform/config.json` (or the platform equivalent).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("vehform").join("config.json"))
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    match Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidEndpoint(endpoint.to_string())),
    }
}
