//! Command implementations and the runtime they share.

pub mod actions;
pub mod chat;
pub mod lang;
pub mod login;
pub mod open;

use std::sync::Arc;

use anyhow::{Context, Result};
use smartcrop_application::{ActiveView, AdvisoryApp};
use smartcrop_core::config::ClientConfig;
use smartcrop_core::state::PreferenceStore;
use smartcrop_core::{LocaleStore, SessionStore};
use smartcrop_infrastructure::{ConfigService, SmartCropPaths, TomlPreferenceStore};
use smartcrop_interaction::HttpAdvisoryClient;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{logging, render};

/// Stores, client and navigator, built once per invocation.
pub struct Runtime {
    pub app: AdvisoryApp,
    pub config: ClientConfig,
    _log_guard: Option<WorkerGuard>,
}

impl Runtime {
    pub async fn bootstrap(backend: Option<&str>, verbose: bool) -> Result<Self> {
        let paths = SmartCropPaths::default();
        let config = ConfigService::new(&paths)
            .and_then(|service| service.load_for_cli(backend))
            .context("Failed to load client configuration")?;
        let log_guard = logging::init(&config, verbose, paths.logs_dir().ok().as_deref())?;

        tracing::debug!(backend = %config.backend_url, "Starting SmartCrop client");

        let storage: Arc<dyn PreferenceStore> = Arc::new(
            TomlPreferenceStore::new(&paths).context("Failed to locate the state file")?,
        );
        let sessions = Arc::new(
            SessionStore::restore(storage.clone())
                .await
                .context("Failed to restore the saved session")?,
        );
        let locale = Arc::new(
            LocaleStore::restore(storage)
                .await
                .context("Failed to restore the saved language")?,
        );
        let api = Arc::new(HttpAdvisoryClient::new(config.backend_url.as_str()));

        Ok(Self {
            app: AdvisoryApp::new(sessions, locale, api),
            config,
            _log_guard: log_guard,
        })
    }
}

/// Navigates, mounts until the view settles or Ctrl-C, then prints it.
pub async fn mount_and_show(rt: &Runtime, path: &str) -> Result<Arc<ActiveView>> {
    let view = rt.app.navigate(path).await;
    tokio::select! {
        _ = view.mount() => {}
        _ = tokio::signal::ctrl_c() => {
            rt.app.close().await;
            render::notice("Cancelled.");
            return Ok(view);
        }
    }
    render::show_active(&rt.app).await;
    Ok(view)
}
