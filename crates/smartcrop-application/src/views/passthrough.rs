use async_trait::async_trait;
use serde_json::Value;
use smartcrop_core::advisory::PassthroughPage;
use smartcrop_core::{AdvisoryError, Result, Route};

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};
use crate::views::View;

/// Sends raw JSON to one endpoint and shows the raw reply.
///
/// GET pages load on mount since they take no input; POST pages wait for
/// [`PassthroughView::run`].
pub struct PassthroughView {
    ctx: ViewContext,
    scope: ViewScope,
    page: PassthroughPage,
    result: SlotCell<Value>,
}

impl PassthroughView {
    pub fn new(ctx: ViewContext, page: PassthroughPage) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("passthrough"),
            page,
            result: SlotCell::new("passthrough"),
        }
    }

    pub fn page(&self) -> PassthroughPage {
        self.page
    }

    pub fn result(&self) -> Slot<Value> {
        self.result.get()
    }

    /// Runs the page with the user's JSON text. Blank input sends `{}`.
    ///
    /// Text that is not JSON is rejected before anything is sent.
    pub async fn run(&self, input: &str) -> Option<Result<Value>> {
        let body = match self.page.body_from_input(input) {
            Ok(body) => body,
            Err(err) => return Some(self.reject(err)),
        };
        let token = self.ctx.sessions.token().await;

        self.scope
            .act(
                &self.result,
                self.ctx.api.passthrough(self.page, body, token.as_deref()),
            )
            .await
    }

    fn reject(&self, err: AdvisoryError) -> Result<Value> {
        tracing::debug!(endpoint = self.page.endpoint(), "Rejected input: {}", err);
        if self.result.begin_action() {
            self.result.finish(Err(err.clone()));
        }
        Err(err)
    }
}

#[async_trait]
impl View for PassthroughView {
    fn route(&self) -> Route {
        Route::Page(self.page)
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn mount(&self) {
        if self.page.takes_input() {
            return;
        }
        let token = self.ctx.sessions.token().await;
        self.scope
            .load(
                &self.result,
                self.ctx.api.passthrough(self.page, None, token.as_deref()),
            )
            .await;
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let mut screen = Screen::new(self.page.title(dict));
        if self.page.takes_input() {
            screen = screen.muted(dict.json_placeholder);
        }

        match self.result.get() {
            Slot::Idle => screen.muted(dict.run),
            Slot::Loading => screen.muted(dict.loading),
            Slot::Failure(err) if err.is_rejection() => screen.muted(dict.invalid_json),
            Slot::Failure(_) => screen.muted(dict.unavailable),
            Slot::Success(value) => {
                let pretty =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                screen.code(pretty)
            }
        }
    }
}
