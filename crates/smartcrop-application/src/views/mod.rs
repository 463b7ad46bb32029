//! Views resolved from routes.
//!
//! A view is created fresh on every navigation, issues its on-mount calls from
//! [`View::mount`] and is discarded on [`View::unmount`].

mod calendar;
mod chat;
mod dashboard;
mod disease;
mod home;
mod login;
mod not_found;
mod passthrough;
mod schemes;

use async_trait::async_trait;
use smartcrop_core::Route;

pub use calendar::CalendarView;
pub use chat::ChatView;
pub use dashboard::DashboardView;
pub use disease::DiseaseDetector;
pub use home::HomeView;
pub use login::{LoginForm, LoginOutcome, LoginStep, LoginView};
pub use not_found::NotFoundView;
pub use passthrough::PassthroughView;
pub use schemes::SchemeFinderView;

use crate::scope::ViewScope;
use crate::screen::Screen;

#[async_trait]
pub trait View: Send + Sync {
    fn route(&self) -> Route;

    fn scope(&self) -> &ViewScope;

    /// Issues the view's on-mount calls and waits for them to settle or be discarded.
    async fn mount(&self) {}

    /// Renders with the dictionary of the language active right now.
    async fn render(&self) -> Screen;

    fn unmount(&self) {
        self.scope().cancel();
    }

    fn is_mounted(&self) -> bool {
        self.scope().is_active()
    }
}

/// The view currently resolved by the router.
pub enum ActiveView {
    Home(HomeView),
    Login(LoginView),
    Dashboard(DashboardView),
    Calendar(CalendarView),
    Schemes(SchemeFinderView),
    Page(PassthroughView),
    Chat(ChatView),
    NotFound(NotFoundView),
}

impl ActiveView {
    pub fn as_view(&self) -> &dyn View {
        match self {
            ActiveView::Home(v) => v,
            ActiveView::Login(v) => v,
            ActiveView::Dashboard(v) => v,
            ActiveView::Calendar(v) => v,
            ActiveView::Schemes(v) => v,
            ActiveView::Page(v) => v,
            ActiveView::Chat(v) => v,
            ActiveView::NotFound(v) => v,
        }
    }

    pub fn route(&self) -> Route {
        self.as_view().route()
    }

    pub async fn mount(&self) {
        self.as_view().mount().await
    }

    pub async fn render(&self) -> Screen {
        self.as_view().render().await
    }

    pub fn unmount(&self) {
        self.as_view().unmount()
    }

    pub fn is_mounted(&self) -> bool {
        self.as_view().is_mounted()
    }

    pub fn as_login(&self) -> Option<&LoginView> {
        match self {
            ActiveView::Login(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dashboard(&self) -> Option<&DashboardView> {
        match self {
            ActiveView::Dashboard(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_schemes(&self) -> Option<&SchemeFinderView> {
        match self {
            ActiveView::Schemes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&PassthroughView> {
        match self {
            ActiveView::Page(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_chat(&self) -> Option<&ChatView> {
        match self {
            ActiveView::Chat(v) => Some(v),
            _ => None,
        }
    }
}
