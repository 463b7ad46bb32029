use anyhow::{Result, anyhow, bail};
use smartcrop_application::LoginOutcome;
use smartcrop_core::Route;

use super::{Runtime, mount_and_show};
use crate::{prompt, render};

pub struct LoginArgs {
    pub phone: String,
    pub farmer_id: String,
    pub aadhaar: String,
    pub otp: Option<String>,
}

/// Requests and verifies an OTP, then opens the dashboard.
pub async fn run(rt: &Runtime, args: LoginArgs) -> Result<()> {
    let view = rt.app.navigate(Route::Login.path()).await;
    let login = view
        .as_login()
        .ok_or_else(|| anyhow!("login route did not resolve to the login view"))?;

    match login.request_otp(&args.farmer_id, &args.phone).await {
        Some(LoginOutcome::OtpSent { .. }) => {
            if let Some(message) = login.message().await {
                render::notice(&message);
            }
        }
        Some(LoginOutcome::Failed(message)) => bail!(message),
        Some(LoginOutcome::Authenticated(_)) | None => bail!("OTP request did not complete"),
    }

    let dict = rt.app.context().locale.dictionary();
    let otp = match args.otp {
        Some(otp) => otp,
        None => match prompt::ask(dict.enter_otp)? {
            Some(otp) => otp,
            None => bail!("Login cancelled"),
        },
    };

    match login.verify_otp(&otp, &args.aadhaar).await {
        Some(LoginOutcome::Authenticated(session)) => {
            tracing::info!(farmer_id = %session.farmer_id, "Authenticated");
        }
        Some(LoginOutcome::Failed(message)) => bail!(message),
        Some(LoginOutcome::OtpSent { .. }) | None => bail!("OTP verification did not complete"),
    }

    mount_and_show(rt, Route::Dashboard.path()).await?;
    Ok(())
}
