//! Request and response models of the advisory service.
//!
//! Response types only declare the fields the client consumes; anything else the
//! service sends is ignored.

pub mod auth;
pub mod calendar;
pub mod chat;
pub mod dashboard;
pub mod disease;
pub mod passthrough;
pub mod scheme;

pub use auth::{OtpIssued, OtpRequest, OtpVerification, VerifiedLogin};
pub use calendar::{CalendarItem, CalendarResponse};
pub use chat::{ChatReply, ChatRequest, ChatRole, ChatTranscript, ChatTurn};
pub use dashboard::{
    DashboardSnapshot, Notification, Recommendation, SoilHealth, Weather, WeatherAlert,
};
pub use disease::{Diagnosis, ImageUpload};
pub use passthrough::{HttpMethod, PassthroughPage};
pub use scheme::{Scheme, SchemeQuery, SchemeResults};
