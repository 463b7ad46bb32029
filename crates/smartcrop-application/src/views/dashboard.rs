//! Farmer dashboard: snapshot, calendar and disease detector.

use async_trait::async_trait;
use smartcrop_core::advisory::DashboardSnapshot;
use smartcrop_core::{Dictionary, Route};

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::slot::{Slot, SlotCell};
use crate::views::{CalendarView, DiseaseDetector, View};

pub struct DashboardView {
    ctx: ViewContext,
    scope: ViewScope,
    snapshot: SlotCell<DashboardSnapshot>,
    calendar: CalendarView,
    detector: DiseaseDetector,
}

impl DashboardView {
    pub fn new(ctx: ViewContext) -> Self {
        let scope = ViewScope::new("dashboard");
        Self {
            calendar: CalendarView::embedded(ctx.clone(), scope.child("dashboard/calendar")),
            detector: DiseaseDetector::new(ctx.clone(), scope.child("dashboard/disease")),
            snapshot: SlotCell::new("dashboard"),
            scope,
            ctx,
        }
    }

    pub fn snapshot(&self) -> Slot<DashboardSnapshot> {
        self.snapshot.get()
    }

    pub fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    pub fn detector(&self) -> &DiseaseDetector {
        &self.detector
    }
}

#[async_trait]
impl View for DashboardView {
    fn route(&self) -> Route {
        Route::Dashboard
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Without a session token no call is made at all.
    async fn mount(&self) {
        let Some(token) = self.ctx.sessions.token().await else {
            tracing::debug!("No session token, dashboard not requested");
            return;
        };
        tokio::join!(
            self.scope
                .load(&self.snapshot, self.ctx.api.dashboard(&token)),
            self.calendar.mount(),
        );
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();

        if !self.ctx.sessions.is_authenticated().await {
            return Screen::new(dict.please_login).link(dict.login, Route::Login.path());
        }

        let screen = match self.snapshot.get() {
            Slot::Idle | Slot::Loading => Screen::new(dict.crop_suggestions).muted(dict.loading),
            Slot::Failure(_) => Screen::new(dict.crop_suggestions).muted(dict.unavailable),
            Slot::Success(snapshot) => render_snapshot(dict, &snapshot),
        };
        screen
            .extend(self.calendar.render().await)
            .extend(self.detector.render().await)
    }
}

fn render_snapshot(dict: &Dictionary, snapshot: &DashboardSnapshot) -> Screen {
    let mut screen = Screen::new(dict.crop_suggestions);
    for rec in &snapshot.recommendations {
        screen = screen.bullet(format!(
            "{} ({}: {}%)",
            rec.crop,
            dict.score,
            rec.score_percent()
        ));
        if !rec.reason.is_empty() {
            screen = screen.muted(rec.reason.clone());
        }
    }

    let soil = &snapshot.soil;
    screen = screen.heading(dict.soil_health).text(format!(
        "pH {} | N {} | P {} | K {}",
        soil.ph, soil.nitrogen, soil.phosphorus, soil.potassium
    ));
    if !soil.advice.is_empty() {
        screen = screen.text(soil.advice.clone());
    }

    screen = screen.heading(dict.weather_risks);
    for alert in &snapshot.weather.alerts {
        screen = screen.bullet(format!("{}: {}", alert.kind, alert.message));
    }

    screen = screen.heading(dict.notifications);
    for note in &snapshot.notifications {
        screen = screen.bullet(format!(
            "{} - {}",
            note.title.as_deref().unwrap_or(dict.update),
            note.message.as_deref().unwrap_or_default()
        ));
    }
    screen
}
