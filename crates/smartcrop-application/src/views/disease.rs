use smartcrop_core::advisory::{Diagnosis, ImageUpload};
use smartcrop_core::{AdvisoryError, Result};

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};

/// Image-based disease detection, embedded in the dashboard.
pub struct DiseaseDetector {
    ctx: ViewContext,
    scope: ViewScope,
    diagnosis: SlotCell<Diagnosis>,
}

impl DiseaseDetector {
    pub fn new(ctx: ViewContext, scope: ViewScope) -> Self {
        Self {
            ctx,
            scope,
            diagnosis: SlotCell::new("diagnosis"),
        }
    }

    pub fn diagnosis(&self) -> Slot<Diagnosis> {
        self.diagnosis.get()
    }

    /// Uploads `image` with the session token.
    ///
    /// Without a token nothing is sent and a rejection is returned. `None` means the
    /// result was discarded or an analysis is already running.
    pub async fn analyze(&self, image: ImageUpload) -> Option<Result<Diagnosis>> {
        let Some(token) = self.ctx.sessions.token().await else {
            return Some(Err(AdvisoryError::rejected(
                "disease detection",
                "a session token is required",
            )));
        };

        tracing::info!(
            file = %image.file_name,
            bytes = image.bytes.len(),
            "Uploading image for disease detection"
        );
        self.scope
            .act(&self.diagnosis, self.ctx.api.detect_disease(&image, &token))
            .await
    }

    pub async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let screen = Screen::new(dict.disease_detection);

        if !self.ctx.sessions.is_authenticated().await {
            return screen.muted(dict.please_login);
        }

        match self.diagnosis.get() {
            Slot::Idle => screen.muted(dict.choose_image),
            Slot::Loading => screen.muted(dict.loading),
            Slot::Success(result) => screen.text(format!(
                "{} — {}",
                result.diagnosis, result.treatment
            )),
            Slot::Failure(_) => screen.muted(dict.unavailable),
        }
    }
}
