//! Phone/OTP login in two steps.

use async_trait::async_trait;
use smartcrop_core::advisory::{OtpRequest, OtpVerification, VerifiedLogin};
use smartcrop_core::{Route, Session};
use tokio::sync::Mutex;

use crate::app::ViewContext;
use crate::scope::ViewScope;
use crate::screen::Screen;
use crate::views::View;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub farmer_id: String,
    pub phone: String,
    pub aadhaar: String,
    pub otp: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    RequestOtp,
    VerifyOtp,
}

/// What a login action produced. The caller decides where to navigate next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    OtpSent { demo_otp: Option<String> },
    Authenticated(Session),
    /// Carries the localized message shown to the farmer.
    Failed(String),
}

#[derive(Debug, Default)]
struct LoginState {
    form: LoginForm,
    step: LoginStep,
    loading: bool,
    message: Option<String>,
}

pub struct LoginView {
    ctx: ViewContext,
    scope: ViewScope,
    state: Mutex<LoginState>,
}

impl LoginView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new("login"),
            state: Mutex::new(LoginState::default()),
        }
    }

    pub async fn form(&self) -> LoginForm {
        self.state.lock().await.form.clone()
    }

    pub async fn step(&self) -> LoginStep {
        self.state.lock().await.step
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    pub async fn message(&self) -> Option<String> {
        self.state.lock().await.message.clone()
    }

    /// Step one. Returns `None` if a call is already outstanding or the view was
    /// unmounted before the reply arrived.
    pub async fn request_otp(&self, farmer_id: &str, phone: &str) -> Option<LoginOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.loading {
                return None;
            }
            state.form.farmer_id = farmer_id.trim().to_string();
            state.form.phone = phone.trim().to_string();
            state.loading = true;
        }

        let request = OtpRequest::new(phone.trim(), farmer_id);
        let result = self.scope.run(self.ctx.api.request_otp(&request)).await?;

        let dict = self.ctx.locale.dictionary();
        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(issued) => {
                state.message = Some(match issued.demo_otp.as_deref() {
                    Some(code) => format!("{} {}", dict.otp_sent, code),
                    None => dict.otp_sent.to_string(),
                });
                state.step = LoginStep::VerifyOtp;
                Some(LoginOutcome::OtpSent {
                    demo_otp: issued.demo_otp,
                })
            }
            Err(err) => {
                tracing::warn!("OTP request failed: {}", err);
                state.message = Some(dict.otp_request_failed.to_string());
                Some(LoginOutcome::Failed(dict.otp_request_failed.to_string()))
            }
        }
    }

    /// Step two. On success the session store is updated before returning
    /// [`LoginOutcome::Authenticated`]. Returns `None` without a call until an OTP has
    /// been requested.
    pub async fn verify_otp(&self, otp: &str, aadhaar: &str) -> Option<LoginOutcome> {
        let form = {
            let mut state = self.state.lock().await;
            if state.loading || state.step != LoginStep::VerifyOtp {
                return None;
            }
            state.form.otp = otp.trim().to_string();
            state.form.aadhaar = aadhaar.trim().to_string();
            state.loading = true;
            state.form.clone()
        };

        let request = OtpVerification::new(
            form.phone.as_str(),
            form.otp.as_str(),
            &form.farmer_id,
            &form.aadhaar,
            self.ctx.locale.get().code(),
        );
        let result = self.scope.run(self.ctx.api.verify_otp(&request)).await?;

        let outcome = match result {
            Ok(login) => self.complete_login(&login, &form).await,
            Err(err) => {
                tracing::warn!("OTP verification failed: {}", err);
                None
            }
        };

        let dict = self.ctx.locale.dictionary();
        let mut state = self.state.lock().await;
        state.loading = false;
        Some(match outcome {
            Some(session) => {
                state.message = None;
                LoginOutcome::Authenticated(session)
            }
            None => {
                state.message = Some(dict.otp_verify_failed.to_string());
                LoginOutcome::Failed(dict.otp_verify_failed.to_string())
            }
        })
    }

    async fn complete_login(&self, login: &VerifiedLogin, form: &LoginForm) -> Option<Session> {
        let Some(token) = login.token() else {
            tracing::warn!("OTP verification returned no token");
            return None;
        };

        let farmer_id = login
            .farmer_id()
            .or_else(|| Some(form.farmer_id.as_str()).filter(|f| !f.is_empty()))
            .unwrap_or(form.phone.as_str());

        if let Err(err) = self.ctx.sessions.login(token, farmer_id).await {
            tracing::error!("Failed to persist session: {}", err);
            return None;
        }
        Some(Session::new(token, farmer_id))
    }
}

#[async_trait]
impl View for LoginView {
    fn route(&self) -> Route {
        Route::Login
    }

    fn scope(&self) -> &ViewScope {
        &self.scope
    }

    async fn render(&self) -> Screen {
        let dict = self.ctx.locale.dictionary();
        let state = self.state.lock().await;

        let mut screen = Screen::new(dict.login);
        screen = match state.step {
            LoginStep::RequestOtp => screen
                .text(format!("{}: {}", dict.farmer_id, state.form.farmer_id))
                .text(format!("{}: {}", dict.phone, state.form.phone))
                .muted(dict.request_otp),
            LoginStep::VerifyOtp => screen
                .text(format!("{}: {}", dict.phone, state.form.phone))
                .text(format!("{}: {}", dict.aadhaar, state.form.aadhaar))
                .text(format!("{}: {}", dict.enter_otp, state.form.otp))
                .muted(dict.verify_otp),
        };

        if state.loading {
            screen = screen.muted(dict.loading);
        }
        if let Some(message) = &state.message {
            screen = screen.text(message.clone());
        }
        screen
    }
}
