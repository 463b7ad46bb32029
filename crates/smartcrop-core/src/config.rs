//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Backend used when neither the config file nor the environment names one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable that overrides `backend_url` from the config file.
pub const BACKEND_URL_ENV: &str = "SMARTCROP_BACKEND_URL";

/// Contents of `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every API path is resolved against.
    pub backend_url: String,
    /// Default tracing filter, e.g. `info` or `smartcrop_interaction=debug`.
    pub log_level: String,
    /// Also write logs to a daily file in the logs directory.
    pub log_to_file: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl ClientConfig {
    /// Replaces the backend URL when `url` is non-blank.
    pub fn with_backend_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.backend_url = url.to_string();
        }
        self
    }
}
