//! HttpAdvisoryClient - REST implementation of [`AdvisoryApi`].
//!
//! Every typed call goes through [`HttpAdvisoryClient::call`], which sends exactly one
//! request and parses whatever comes back as JSON. Status codes are logged but never
//! branched on.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use smartcrop_core::advisory::{
    CalendarItem, CalendarResponse, ChatReply, ChatRequest, DashboardSnapshot, Diagnosis,
    HttpMethod, ImageUpload, OtpIssued, OtpRequest, OtpVerification, PassthroughPage, Scheme,
    SchemeQuery, SchemeResults, VerifiedLogin,
};
use smartcrop_core::config::DEFAULT_BACKEND_URL;
use smartcrop_core::{AdvisoryApi, AdvisoryError, Result};

use crate::call::{ApiCall, RequestBody};

/// Client for the advisory backend.
#[derive(Clone, Debug)]
pub struct HttpAdvisoryClient {
    client: Client,
    base_url: String,
}

impl HttpAdvisoryClient {
    /// Creates a client for `base_url`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured `reqwest::Client`, e.g. one with a proxy.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends one request and returns the parsed JSON body.
    pub async fn call(&self, call: ApiCall) -> Result<Value> {
        let url = self.url(&call.path);
        let description = call.describe();
        tracing::debug!("[HttpAdvisoryClient] -> {}", description);

        let mut request = match call.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }

        request = match call.body {
            RequestBody::Empty => request,
            RequestBody::Json(body) => request.json(&body),
            RequestBody::ImageForm { image, token } => {
                request.multipart(image_form(image, token)?)
            }
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!("[HttpAdvisoryClient] {} failed: {}", description, e);
            AdvisoryError::network(format!("{description}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "[HttpAdvisoryClient] {} returned status {}",
                description,
                status
            );
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AdvisoryError::network(format!("{description}: {e}")))?;
        tracing::debug!(
            "[HttpAdvisoryClient] <- {} ({}, {} bytes)",
            description,
            status,
            bytes.len()
        );

        serde_json::from_slice(&bytes)
            .map_err(|e| AdvisoryError::malformed(call.path, format!("not JSON: {e}")))
    }

    /// [`call`](Self::call) followed by decoding into the fields the caller consumes.
    async fn call_typed<T: DeserializeOwned>(&self, call: ApiCall) -> Result<T> {
        let path = call.path.clone();
        let value = self.call(call).await?;
        serde_json::from_value(value).map_err(|e| AdvisoryError::malformed(path, e.to_string()))
    }
}

impl Default for HttpAdvisoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

fn image_form(image: ImageUpload, token: String) -> Result<Form> {
    let part = Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.mime_type)
        .map_err(|e| AdvisoryError::rejected("image type", e.to_string()))?;
    Ok(Form::new().part("file", part).text("token", token))
}

fn to_json<T: serde::Serialize>(body: &T) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
}

#[async_trait]
impl AdvisoryApi for HttpAdvisoryClient {
    async fn request_otp(&self, request: &OtpRequest) -> Result<OtpIssued> {
        self.call_typed(ApiCall::post_json("/auth/request-otp", to_json(request)?))
            .await
    }

    async fn verify_otp(&self, request: &OtpVerification) -> Result<VerifiedLogin> {
        self.call_typed(ApiCall::post_json("/auth/verify-otp", to_json(request)?))
            .await
    }

    async fn dashboard(&self, token: &str) -> Result<DashboardSnapshot> {
        self.call_typed(ApiCall::get("/dashboard").query("token", token))
            .await
    }

    async fn calendar(&self, token: &str) -> Result<Vec<CalendarItem>> {
        let response: CalendarResponse = self
            .call_typed(ApiCall::get("/calendar").query("token", token))
            .await?;
        Ok(response.items)
    }

    async fn detect_disease(&self, image: &ImageUpload, token: &str) -> Result<Diagnosis> {
        self.call_typed(ApiCall::post_image("/disease-detect", image.clone(), token))
            .await
    }

    async fn search_schemes(&self, query: &SchemeQuery) -> Result<Vec<Scheme>> {
        let results: SchemeResults = self
            .call_typed(ApiCall::post_json("/schemes", to_json(query)?))
            .await?;
        Ok(results.schemes)
    }

    async fn passthrough(
        &self,
        page: PassthroughPage,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value> {
        let call = match page.method() {
            HttpMethod::Get => {
                let call = ApiCall::get(page.endpoint());
                match token.filter(|t| !t.is_empty()) {
                    Some(token) => call.query("token", token),
                    None => call,
                }
            }
            HttpMethod::Post => ApiCall::post_json(
                page.endpoint(),
                body.unwrap_or_else(|| Value::Object(Default::default())),
            ),
        };
        self.call(call).await
    }

    async fn chat(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            text: text.to_string(),
        };
        let reply: ChatReply = self
            .call_typed(ApiCall::post_json("/chat", to_json(&request)?))
            .await?;
        Ok(reply.reply)
    }
}
