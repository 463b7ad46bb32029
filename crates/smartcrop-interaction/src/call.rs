//! Description of a single request before it is sent.

use serde_json::Value;
use smartcrop_core::advisory::{HttpMethod, ImageUpload};

/// What goes in the request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Serialized with `Content-Type: application/json`.
    Json(Value),
    /// `multipart/form-data` with a binary `file` part and a plain `token` part.
    ImageForm { image: ImageUpload, token: String },
}

/// One request against the advisory service, relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    pub fn post_image(
        path: impl Into<String>,
        image: ImageUpload,
        token: impl Into<String>,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::ImageForm {
                image,
                token: token.into(),
            },
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Short description for logs. Query values are left out since they carry tokens.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}
