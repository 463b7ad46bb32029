//! One-shot actions: scheme search, disease detection and passthrough pages.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use smartcrop_application::{AdvisoryApp, Screen};
use smartcrop_core::Route;
use smartcrop_infrastructure::upload::load_image;

use super::Runtime;
use crate::render;

pub async fn schemes(rt: &Runtime, state: &str, crop: &str) -> Result<()> {
    let view = rt.app.navigate(Route::Schemes.path()).await;
    let finder = view
        .as_schemes()
        .ok_or_else(|| anyhow!("schemes route did not resolve to the scheme finder"))?;

    tokio::select! {
        _ = finder.search(state, crop) => {}
        _ = tokio::signal::ctrl_c() => {
            rt.app.close().await;
            render::notice("Cancelled.");
            return Ok(());
        }
    }
    render::show_active(&rt.app).await;
    Ok(())
}

pub async fn detect(rt: &Runtime, file: &Path) -> Result<()> {
    if let Some(screen) = diagnose(&rt.app, file).await? {
        render::print_screen(&screen);
    }
    Ok(())
}

/// The detector screen after analysing `file`, or `None` if cancelled. Without a
/// session the file is never read.
async fn diagnose(app: &AdvisoryApp, file: &Path) -> Result<Option<Screen>> {
    let view = app.navigate(Route::Dashboard.path()).await;
    let detector = view
        .as_dashboard()
        .ok_or_else(|| anyhow!("dashboard route did not resolve to the dashboard"))?
        .detector();

    if !app.context().sessions.is_authenticated().await {
        return Ok(Some(detector.render().await));
    }

    let image = load_image(file)
        .await
        .with_context(|| format!("Cannot read image {}", file.display()))?;

    tokio::select! {
        _ = detector.analyze(image) => {}
        _ = tokio::signal::ctrl_c() => {
            app.close().await;
            render::notice("Cancelled.");
            return Ok(None);
        }
    }
    Ok(Some(detector.render().await))
}

/// Runs a passthrough page. `body` is only used by pages that take input.
pub async fn run_page(rt: &Runtime, path: &str, body: Option<&str>) -> Result<()> {
    let Route::Page(page) = Route::from_path(path) else {
        bail!("{path} is not a runnable page");
    };

    let view = rt.app.navigate(path).await;
    let runner = view
        .as_page()
        .ok_or_else(|| anyhow!("{path} did not resolve to a page view"))?;

    let work = async {
        if page.takes_input() {
            if let Some(Err(err)) = runner.run(body.unwrap_or_default()).await {
                tracing::debug!("Page run failed: {}", err);
            }
        } else {
            view.mount().await;
        }
    };

    tokio::select! {
        _ = work => {}
        _ = tokio::signal::ctrl_c() => {
            rt.app.close().await;
            render::notice("Cancelled.");
            return Ok(());
        }
    }
    render::show_active(&rt.app).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcrop_core::state::MemoryPreferenceStore;
    use smartcrop_core::{LocaleStore, SessionStore};
    use smartcrop_interaction::HttpAdvisoryClient;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_detect_without_session_asks_for_login_before_reading_file() {
        let storage = Arc::new(MemoryPreferenceStore::new());
        let sessions = Arc::new(SessionStore::restore(storage.clone()).await.unwrap());
        let locale = Arc::new(LocaleStore::restore(storage).await.unwrap());
        let app = AdvisoryApp::new(
            sessions,
            locale,
            Arc::new(HttpAdvisoryClient::new("http://127.0.0.1:9")),
        );

        let screen = diagnose(&app, Path::new("/nonexistent/leaf.jpg"))
            .await
            .unwrap()
            .unwrap();
        assert!(screen.contains("Please login"));
    }
}
