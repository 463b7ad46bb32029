use async_trait::async_trait;
use smartcrop_core::Route;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::views::View;

/// Landing page: hero, feature cards and the offline note. Issues no calls.
pub struct HomeView {
    ctx: ViewContext,
    scope: ViewScope,
}

impl HomeView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("home"),
        }
    }
}

#[async_trait]
impl View for HomeView {
    fn route(&self) -> Route {
        Route::Home
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();

        let mut screen = Screen::new(dict.app_title).text(dict.app_subtitle);
        for feature in dict.features() {
            screen = screen.bullet(*feature);
        }

        for route in Route::feature_routes() {
            let label = match &route {
                Route::Page(page) => page.title(dict),
                Route::Calendar => dict.crop_calendar,
                Route::Schemes => dict.schemes,
                Route::Chat => dict.chatbot,
                _ => continue,
            };
            screen = screen.link(label, route.path());
        }

        screen.muted(dict.offline)
    }
}

