use async_trait::async_trait;
use smartcrop_core::advisory::{ChatRole, ChatTranscript, ChatTurn};
use smartcrop_core::{Result, Route};
use tokio::sync::Mutex;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};
use crate::views::View;

/// Chat with the advisory assistant. The transcript lives as long as the view.
pub struct ChatView {
    ctx: ViewContext,
    scope: ViewScope,
    transcript: Mutex<ChatTranscript>,
    reply: SlotCell<String>,
}

impl ChatView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("chat"),
            transcript: Mutex::new(ChatTranscript::new()),
            reply: SlotCell::new("chat"),
        }
    }

    pub async fn turns(&self) -> Vec<ChatTurn> {
        self.transcript.lock().await.turns().to_vec()
    }

    /// Sends one question. Blank text is ignored.
    ///
    /// Only a successful reply is recorded, question first; a failure leaves the
    /// transcript as it was.
    pub async fn send(&self, text: &str) -> Option<Result<String>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let result = self
            .scope
            .act(&self.reply, self.ctx.api.chat(text))
            .await?;
        if let Ok(reply) = &result {
            self.transcript
                .lock()
                .await
                .record_exchange(text, reply.clone());
        }
        Some(result)
    }
}

#[async_trait]
impl View for ChatView {
    fn route(&self) -> Route {
        Route::Chat
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let mut screen = Screen::new(dict.chatbot);

        for turn in self.transcript.lock().await.turns() {
            let speaker = match turn.role {
                ChatRole::User => dict.you,
                ChatRole::Bot => dict.bot,
            };
            screen = screen.text(format!("{}: {}", speaker, turn.text));
        }

        match self.reply.get() {
            Slot::Loading => screen = screen.muted(dict.loading),
            Slot::Failure(_) => screen = screen.muted(dict.unavailable),
            Slot::Idle | Slot::Success(_) => {}
        }
        screen.muted(dict.chat_placeholder)
    }
}
