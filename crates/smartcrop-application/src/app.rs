//! Navigator: resolves routes to views and owns the mounted one.

use std::sync::Arc;

use smartcrop_core::{AdvisoryApi, Language, LocaleStore, Result, Route, SessionStore};
use tokio::sync::Mutex;

use crate::shell::Shell;
use crate::views::{
    ActiveView, CalendarView, ChatView, DashboardView, HomeView, LoginView, NotFoundView,
    PassthroughView, SchemeFinderView,
};

/// Everything a view may read or call. Cloned into each view on creation.
#[derive(Clone)]
pub struct ViewContext {
    pub sessions: Arc<SessionStore>,
    pub locale: Arc<LocaleStore>,
    pub api: Arc<dyn AdvisoryApi>,
}

impl ViewContext {
    pub fn new(
        sessions: Arc<SessionStore>,
        locale: Arc<LocaleStore>,
        api: Arc<dyn AdvisoryApi>,
    ) -> Self {
        Self {
            sessions,
            locale,
            api,
        }
    }
}

pub struct AdvisoryApp {
    ctx: ViewContext,
    active: Mutex<Option<Arc<ActiveView>>>,
}

impl AdvisoryApp {
    pub fn new(
        sessions: Arc<SessionStore>,
        locale: Arc<LocaleStore>,
        api: Arc<dyn AdvisoryApi>,
    ) -> Self {
        Self {
            ctx: ViewContext::new(sessions, locale, api),
            active: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }

    /// Builds a fresh, unmounted view for `route`. There is no authentication gating
    /// here; views that need a session decide what to show without one.
    pub fn resolve(&self, route: Route) -> ActiveView {
        let ctx = self.ctx.clone();
        match route {
            Route::Home => ActiveView::Home(HomeView::new(ctx)),
            Route::Login => ActiveView::Login(LoginView::new(ctx)),
            Route::Dashboard => ActiveView::Dashboard(DashboardView::new(ctx)),
            Route::Calendar => ActiveView::Calendar(CalendarView::new(ctx)),
            Route::Schemes => ActiveView::Schemes(SchemeFinderView::new(ctx)),
            Route::Page(page) => ActiveView::Page(PassthroughView::new(ctx, page)),
            Route::Chat => ActiveView::Chat(ChatView::new(ctx)),
            Route::NotFound(path) => ActiveView::NotFound(NotFoundView::new(ctx, path)),
        }
    }

    /// Unmounts the current view, if any, and activates the view for `path`.
    ///
    /// The new view is returned unmounted; the caller drives [`ActiveView::mount`].
    pub async fn navigate(&self, path: &str) -> Arc<ActiveView> {
        let route = Route::from_path(path);
        tracing::info!(path = route.path(), "Navigating");

        let view = Arc::new(self.resolve(route));
        let previous = self.active.lock().await.replace(view.clone());
        if let Some(previous) = previous {
            previous.unmount();
        }
        view
    }

    pub async fn active(&self) -> Option<Arc<ActiveView>> {
        self.active.lock().await.clone()
    }

    /// Unmounts the current view without activating another.
    pub async fn close(&self) {
        if let Some(view) = self.active.lock().await.take() {
            view.unmount();
        }
    }

    pub async fn shell(&self) -> Shell {
        let session = self.ctx.sessions.current().await;
        Shell::compose(self.ctx.locale.dictionary(), self.ctx.locale.get(), &session)
    }

    pub async fn set_language(&self, code: &str) -> Result<Language> {
        self.ctx.locale.set(code).await
    }

    pub async fn logout(&self) -> Result<()> {
        self.ctx.sessions.logout().await
    }
}
