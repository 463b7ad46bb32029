use async_trait::async_trait;
use smartcrop_core::Route;
use smartcrop_core::advisory::CalendarItem;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};
use crate::views::View;

/// Crop calendar. Used as a page of its own and embedded in the dashboard.
pub struct CalendarView {
    ctx: ViewContext,
    scope: ViewScope,
    items: SlotCell<Vec<CalendarItem>>,
}

impl CalendarView {
    pub fn new(ctx: ViewContext) -> Self {
        Self::embedded(ctx, ViewScope::new("calendar"))
    }

    /// Runs its calls under `scope`, normally a child of the hosting view's scope.
    pub fn embedded(ctx: ViewContext, scope: ViewScope) -> Self {
        Self {
            ctx,
            scope,
            items: SlotCell::new("calendar"),
        }
    }

    pub fn items(&self) -> Slot<Vec<CalendarItem>> {
        self.items.get()
    }
}

#[async_trait]
impl View for CalendarView {
    fn route(&self) -> Route {
        Route::Calendar
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn mount(&self) {
        let Some(token) = self.ctx.sessions.token().await else {
            tracing::debug!("No session token, calendar not requested");
            return;
        };
        self.scope
            .load(&self.items, self.ctx.api.calendar(&token))
            .await;
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let mut screen = Screen::new(dict.crop_calendar);

        if !self.ctx.sessions.is_authenticated().await {
            return screen.muted(dict.please_login);
        }

        match self.items.get() {
            Slot::Idle | Slot::Loading => screen.muted(dict.loading),
            Slot::Failure(_) => screen.muted(dict.unavailable),
            Slot::Success(items) => {
                for item in items {
                    screen = screen
                        .bullet(format!("{} • {}", item.crop, item.phase))
                        .text(item.display_date());
                    if let Some(note) = item.note() {
                        screen = screen.muted(note);
                    }
                }
                screen
            }
        }
    }
}
