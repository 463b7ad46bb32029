//! Domain layer of the SmartCrop advisory client.
//!
//! Holds the models exchanged with the advisory service, the persisted session and
//! locale stores, the localized string catalogs and the route table. Nothing here
//! performs I/O directly; storage and HTTP are reached through the
//! [`state::PreferenceStore`] and [`api::AdvisoryApi`] traits.

pub mod advisory;
pub mod api;
pub mod config;
pub mod error;
pub mod locale;
pub mod route;
pub mod session;
pub mod state;

pub use api::AdvisoryApi;
pub use error::{AdvisoryError, Result};
pub use locale::{Dictionary, Language, LocaleStore};
pub use route::Route;
pub use session::{Session, SessionStore};
