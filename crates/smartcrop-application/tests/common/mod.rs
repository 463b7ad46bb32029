#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use smartcrop_application::AdvisoryApp;
use smartcrop_core::advisory::{
    CalendarItem, DashboardSnapshot, Diagnosis, ImageUpload, OtpIssued, OtpRequest,
    OtpVerification, PassthroughPage, Recommendation, Scheme, SchemeQuery, VerifiedLogin,
};
use smartcrop_core::state::MemoryPreferenceStore;
use smartcrop_core::{AdvisoryApi, AdvisoryError, LocaleStore, Result, SessionStore};
use tokio::sync::Semaphore;

/// In-memory advisory service that records every call.
///
/// A gated fake parks each call until [`FakeApi::release`] hands out a permit.
pub struct FakeApi {
    calls: Mutex<Vec<&'static str>>,
    gate: Option<Semaphore>,
    failing: AtomicBool,
    pub verified: Mutex<VerifiedLogin>,
    pub last_verification: Mutex<Option<OtpVerification>>,
    pub last_passthrough: Mutex<Option<(PassthroughPage, Option<Value>, Option<String>)>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self::build(Some(Semaphore::new(0))))
    }

    fn build(gate: Option<Semaphore>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            gate,
            failing: AtomicBool::new(false),
            verified: Mutex::new(VerifiedLogin::new(Some("tok-123".into()), Some("F-42".into()))),
            last_verification: Mutex::new(None),
            last_passthrough: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    async fn enter(&self, name: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(name);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(AdvisoryError::network("connection refused"));
        }
        Ok(())
    }
}

pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        recommendations: vec![Recommendation {
            crop: "Wheat".into(),
            score: 0.82,
            reason: "Good soil moisture".into(),
        }],
        ..Default::default()
    }
}

#[async_trait]
impl AdvisoryApi for FakeApi {
    async fn request_otp(&self, _request: &OtpRequest) -> Result<OtpIssued> {
        self.enter("request_otp").await?;
        Ok(OtpIssued {
            demo_otp: Some("123456".into()),
        })
    }

    async fn verify_otp(&self, request: &OtpVerification) -> Result<VerifiedLogin> {
        *self.last_verification.lock().unwrap() = Some(request.clone());
        self.enter("verify_otp").await?;
        Ok(self.verified.lock().unwrap().clone())
    }

    async fn dashboard(&self, _token: &str) -> Result<DashboardSnapshot> {
        self.enter("dashboard").await?;
        Ok(sample_snapshot())
    }

    async fn calendar(&self, _token: &str) -> Result<Vec<CalendarItem>> {
        self.enter("calendar").await?;
        Ok(vec![CalendarItem {
            crop: "Rice".into(),
            phase: "Sowing".into(),
            date: "2025-06-15".into(),
            note: None,
        }])
    }

    async fn detect_disease(&self, _image: &ImageUpload, _token: &str) -> Result<Diagnosis> {
        self.enter("detect_disease").await?;
        Ok(Diagnosis {
            diagnosis: "Leaf blight".into(),
            treatment: "Copper fungicide".into(),
        })
    }

    async fn search_schemes(&self, query: &SchemeQuery) -> Result<Vec<Scheme>> {
        self.enter("search_schemes").await?;
        if query.crop == "Saffron" {
            return Ok(Vec::new());
        }
        Ok(vec![Scheme {
            name: "PM-KISAN".into(),
            description: "Income support".into(),
            benefit: "6000 per year".into(),
            link: String::new(),
        }])
    }

    async fn passthrough(
        &self,
        page: PassthroughPage,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value> {
        *self.last_passthrough.lock().unwrap() =
            Some((page, body.clone(), token.map(str::to_string)));
        self.enter("passthrough").await?;
        Ok(json!({ "endpoint": page.endpoint(), "echo": body }))
    }

    async fn chat(&self, text: &str) -> Result<String> {
        self.enter("chat").await?;
        Ok(format!("echo: {text}"))
    }
}

pub struct Harness {
    pub app: AdvisoryApp,
    pub api: Arc<FakeApi>,
    pub sessions: Arc<SessionStore>,
    pub locale: Arc<LocaleStore>,
}

pub async fn harness(api: Arc<FakeApi>) -> Harness {
    let storage = Arc::new(MemoryPreferenceStore::new());
    let sessions = Arc::new(SessionStore::restore(storage.clone()).await.unwrap());
    let locale = Arc::new(LocaleStore::restore(storage).await.unwrap());
    let app = AdvisoryApp::new(sessions.clone(), locale.clone(), api.clone());
    Harness {
        app,
        api,
        sessions,
        locale,
    }
}
