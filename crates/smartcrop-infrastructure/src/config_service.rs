//! Configuration service implementation.
//!
//! Loads [`ClientConfig`] from `config.toml` and applies the environment override for
//! the backend URL.

use std::path::PathBuf;

use smartcrop_core::config::{BACKEND_URL_ENV, ClientConfig};
use smartcrop_core::error::{AdvisoryError, Result};

use crate::paths::SmartCropPaths;
use crate::storage::AtomicTomlFile;

/// Reads client configuration. The file is never created or rewritten by the client.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &SmartCropPaths) -> Result<Self> {
        let config_path = paths
            .config_file()
            .map_err(|e| AdvisoryError::config(e.to_string()))?;
        Ok(Self { config_path })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the file (defaults when absent) and applies `SMARTCROP_BACKEND_URL`.
    pub fn load(&self) -> Result<ClientConfig> {
        let env_backend = std::env::var(BACKEND_URL_ENV).ok();
        self.load_with_override(env_backend.as_deref())
    }

    /// Applies `SMARTCROP_BACKEND_URL`, then `flag` on top of it.
    pub fn load_for_cli(&self, flag: Option<&str>) -> Result<ClientConfig> {
        let env_backend = std::env::var(BACKEND_URL_ENV).ok();
        self.load_with_override(flag.or(env_backend.as_deref()))
    }

    /// Loads the file and applies an explicit backend override instead of the
    /// environment.
    pub fn load_with_override(&self, backend_url: Option<&str>) -> Result<ClientConfig> {
        let from_file = AtomicTomlFile::<ClientConfig>::new(self.config_path.clone()).load()?;

        if from_file.is_none() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
        }

        let config = from_file.unwrap_or_default().with_backend_url(backend_url);
        validate_backend_url(&config.backend_url)?;
        Ok(config)
    }
}

fn validate_backend_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AdvisoryError::config(format!(
            "backend_url must start with http:// or https://, got '{}'",
            url
        )))
    }
}
