//! The advisory service as seen by views.

use async_trait::async_trait;
use serde_json::Value;

use crate::advisory::{
    CalendarItem, DashboardSnapshot, Diagnosis, ImageUpload, OtpIssued, OtpRequest,
    OtpVerification, PassthroughPage, Scheme, SchemeQuery, VerifiedLogin,
};
use crate::error::Result;

/// Every remote call the client makes.
///
/// Implementations perform exactly one request per call: no retry, no timeout, no
/// caching. Views depend on this trait, never on a concrete HTTP client.
#[async_trait]
pub trait AdvisoryApi: Send + Sync {
    async fn request_otp(&self, request: &OtpRequest) -> Result<OtpIssued>;

    async fn verify_otp(&self, request: &OtpVerification) -> Result<VerifiedLogin>;

    async fn dashboard(&self, token: &str) -> Result<DashboardSnapshot>;

    async fn calendar(&self, token: &str) -> Result<Vec<CalendarItem>>;

    /// Multipart upload of `image` together with the session token.
    async fn detect_disease(&self, image: &ImageUpload, token: &str) -> Result<Diagnosis>;

    async fn search_schemes(&self, query: &SchemeQuery) -> Result<Vec<Scheme>>;

    /// Sends `body` to the page's endpoint and returns whatever JSON comes back.
    ///
    /// GET pages attach `token` as a query parameter when one is given.
    async fn passthrough(
        &self,
        page: PassthroughPage,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value>;

    async fn chat(&self, text: &str) -> Result<String>;
}
