//! HTTP access to the advisory service.

mod call;
mod client;

pub use call::{ApiCall, RequestBody};
pub use client::HttpAdvisoryClient;
