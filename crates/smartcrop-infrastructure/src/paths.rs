//! Unified path management for SmartCrop configuration files.
//!
//! Everything the client persists lives under one config directory so that a single
//! environment variable can relocate it.

use std::path::PathBuf;

/// Environment variable that replaces the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SMARTCROP_CONFIG_DIR";

const APP_DIR_NAME: &str = "smartcrop";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Neither the override variable nor a platform config directory is available.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(
                f,
                "Cannot determine a config directory; set {}",
                CONFIG_DIR_ENV
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Path management for the client.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/smartcrop/         # Config directory (or $SMARTCROP_CONFIG_DIR)
/// ├── config.toml              # Backend URL and logging settings
/// ├── state.toml               # Persisted language and session
/// └── logs/                    # Daily log files
///     └── smartcrop.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone)]
pub struct SmartCropPaths {
    base_override: Option<PathBuf>,
}

impl SmartCropPaths {
    /// Creates a path resolver.
    ///
    /// With `Some(dir)` every path lives under `dir`; with `None` the
    /// `SMARTCROP_CONFIG_DIR` variable is consulted, then the platform config directory.
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.clone());
        }
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn state_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("state.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

impl Default for SmartCropPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
