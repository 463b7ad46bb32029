use async_trait::async_trait;
use smartcrop_core::advisory::{Scheme, SchemeQuery};
use smartcrop_core::{Result, Route};
use tokio::sync::Mutex;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};
use crate::views::View;

/// Government scheme search by state and crop.
pub struct SchemeFinderView {
    ctx: ViewContext,
    scope: ViewScope,
    query: Mutex<SchemeQuery>,
    results: SlotCell<Vec<Scheme>>,
}

impl SchemeFinderView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("schemes"),
            query: Mutex::new(SchemeQuery::default()),
            results: SlotCell::new("schemes"),
        }
    }

    pub fn results(&self) -> Slot<Vec<Scheme>> {
        self.results.get()
    }

    pub async fn search(&self, state: &str, crop: &str) -> Option<Result<Vec<Scheme>>> {
        let query = SchemeQuery::new(state.trim(), crop.trim());
        *self.query.lock().await = query.clone();
        self.scope
            .act(&self.results, self.ctx.api.search_schemes(&query))
            .await
    }
}

#[async_trait]
impl View for SchemeFinderView {
    fn route(&self) -> Route {
        Route::Schemes
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let query = self.query.lock().await.clone();

        let mut screen = Screen::new(dict.scheme_finder)
            .text(format!("{}: {}", dict.state, query.state))
            .text(format!("{}: {}", dict.crop, query.crop));

        match self.results.get() {
            Slot::Idle => screen.muted(dict.search),
            Slot::Loading => screen.muted(dict.loading),
            Slot::Failure(_) => screen.muted(dict.unavailable),
            Slot::Success(schemes) if schemes.is_empty() => screen.muted(dict.no_results),
            Slot::Success(schemes) => {
                for scheme in schemes {
                    screen = screen.heading(scheme.name).text(scheme.description);
                    if !scheme.benefit.is_empty() {
                        screen = screen.text(scheme.benefit);
                    }
                    if !scheme.link.is_empty() {
                        screen = screen.muted(scheme.link);
                    }
                }
                screen
            }
        }
    }
}
