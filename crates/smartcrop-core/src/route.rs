//! Path-to-view table.

use crate::advisory::PassthroughPage;

/// A top-level view, selected from a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    Calendar,
    Schemes,
    Page(PassthroughPage),
    Chat,
    NotFound(String),
}

impl Route {
    /// Resolves a path. Query strings, fragments and trailing slashes are ignored.
    /// Unknown paths map to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalized {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/calendar" => Route::Calendar,
            "/schemes" => Route::Schemes,
            "/recommendations" => Route::Page(PassthroughPage::Recommendations),
            "/weather" => Route::Page(PassthroughPage::Weather),
            "/soil" => Route::Page(PassthroughPage::SoilAnalysis),
            "/irrigation" => Route::Page(PassthroughPage::IrrigationPlan),
            "/pests" => Route::Page(PassthroughPage::Pests),
            "/market" => Route::Page(PassthroughPage::MarketUpdates),
            "/chat" => Route::Chat,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Calendar => "/calendar",
            Route::Schemes => "/schemes",
            Route::Page(PassthroughPage::Recommendations) => "/recommendations",
            Route::Page(PassthroughPage::Weather) => "/weather",
            Route::Page(PassthroughPage::SoilAnalysis) => "/soil",
            Route::Page(PassthroughPage::IrrigationPlan) => "/irrigation",
            Route::Page(PassthroughPage::Pests) => "/pests",
            Route::Page(PassthroughPage::MarketUpdates) => "/market",
            Route::Chat => "/chat",
            Route::NotFound(path) => path.as_str(),
        }
    }

    /// Feature routes in the order the home page lists them.
    pub fn feature_routes() -> Vec<Route> {
        vec![
            Route::Page(PassthroughPage::Recommendations),
            Route::Page(PassthroughPage::Weather),
            Route::Page(PassthroughPage::SoilAnalysis),
            Route::Page(PassthroughPage::IrrigationPlan),
            Route::Page(PassthroughPage::Pests),
            Route::Page(PassthroughPage::MarketUpdates),
            Route::Calendar,
            Route::Schemes,
            Route::Chat,
        ]
    }
}
