use async_trait::async_trait;
use smartcrop_core::Route;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::views::View;

pub struct NotFoundView {
    ctx: ViewContext,
    scope: ViewScope,
    path: String,
}

impl NotFoundView {
    pub fn new(ctx: ViewContext, path: String) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("not-found"),
            path,
        }
    }
}

#[async_trait]
impl View for NotFoundView {
    fn route(&self) -> Route {
        Route::NotFound(self.path.clone())
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        Screen::new(dict.not_found)
            .muted(self.path.clone())
            .link(dict.app_title, Route::Home.path())
    }
}
