//! Application configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then a
//! handful of environment variables.

use crate::{HealthDeskError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "HEALTHDESK_CONFIG";
/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "healthdesk.toml";

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const MODEL_ENV: &str = "HEALTHDESK_MODEL";
const BASE_URL_ENV: &str = "HEALTHDESK_BASE_URL";

/// Configuration for the whole application
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model name used in the generateContent path
    pub model: String,

    /// API root, without a trailing slash
    pub base_url: String,

    /// Delay between submitting a query and asking the service
    pub reply_delay_ms: u64,

    /// HTTP timeout; `None` leaves it to the client
    pub request_timeout_secs: Option<u64>,

    /// Window icon image
    pub icon_path: PathBuf,

    /// Dashboard profile photo
    pub photo_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            reply_delay_ms: 2000,
            request_timeout_secs: None,
            icon_path: PathBuf::from("healthcare.jpg"),
            photo_path: PathBuf::from("download.jpg"),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default locations and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Resolve the config file, then apply overrides read through `lookup`.
    ///
    /// A path named by `HEALTHDESK_CONFIG` wins over `default_file`, which is
    /// only read when it exists.
    pub fn load_from<F>(default_file: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
            Some(path) => Self::from_file(path)?,
            None if default_file.exists() => Self::from_file(default_file)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HealthDeskError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            HealthDeskError::ConfigError(format!("cannot parse {}: {}", path.display(), e))
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.is_empty()) {
            self.model = model;
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
    }

    /// Set the API root (useful for pointing at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(HealthDeskError::ConfigError(
                "model name must not be empty".to_string(),
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(HealthDeskError::ConfigError(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        Ok(())
    }
}
