//! Phone/OTP login payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /auth/request-otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
}

impl OtpRequest {
    /// Builds a request, dropping a blank farmer id.
    pub fn new(phone: impl Into<String>, farmer_id: &str) -> Self {
        Self {
            phone: phone.into(),
            farmer_id: non_blank(farmer_id),
        }
    }
}

/// Response of `POST /auth/request-otp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OtpIssued {
    /// Code echoed back by the demo backend. May arrive as a string or a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub demo_otp: Option<String>,
}

/// Body of `POST /auth/verify-otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpVerification {
    pub phone: String,
    pub otp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    /// Active language code, so the service can localize its content.
    pub language: String,
}

impl OtpVerification {
    pub fn new(
        phone: impl Into<String>,
        otp: impl Into<String>,
        farmer_id: &str,
        aadhaar: &str,
        language: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            otp: otp.into(),
            farmer_id: non_blank(farmer_id),
            aadhaar: non_blank(aadhaar),
            language: language.into(),
        }
    }
}

/// Response of `POST /auth/verify-otp`.
///
/// `farmer_id` is the canonical field. Some backends send `farmerId`; it is read only
/// when the canonical field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifiedLogin {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    farmer_id: Option<String>,
    #[serde(default, rename = "farmerId")]
    farmer_id_alias: Option<String>,
}

impl VerifiedLogin {
    pub fn new(token: Option<String>, farmer_id: Option<String>) -> Self {
        Self {
            token,
            farmer_id,
            farmer_id_alias: None,
        }
    }

    /// The issued token, if the service accepted the code.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Farmer id from the canonical field, falling back to the alias.
    pub fn farmer_id(&self) -> Option<&str> {
        self.farmer_id
            .as_deref()
            .filter(|f| !f.is_empty())
            .or_else(|| self.farmer_id_alias.as_deref().filter(|f| !f.is_empty()))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_blank_farmer_id() {
        let body = serde_json::to_value(OtpRequest::new("9999999999", "  ")).unwrap();
        assert_eq!(body, json!({ "phone": "9999999999" }));

        let body = serde_json::to_value(OtpRequest::new("9999999999", "F-1")).unwrap();
        assert_eq!(body, json!({ "phone": "9999999999", "farmer_id": "F-1" }));
    }

    #[test]
    fn test_verification_shape() {
        let body =
            serde_json::to_value(OtpVerification::new("9999999999", "123456", "", "1234", "hi"))
                .unwrap();
        assert_eq!(
            body,
            json!({ "phone": "9999999999", "otp": "123456", "aadhaar": "1234", "language": "hi" })
        );
    }

    #[test]
    fn test_demo_otp_string_or_number() {
        let issued: OtpIssued = serde_json::from_value(json!({ "demo_otp": "4321" })).unwrap();
        assert_eq!(issued.demo_otp.as_deref(), Some("4321"));

        let issued: OtpIssued = serde_json::from_value(json!({ "demo_otp": 123456 })).unwrap();
        assert_eq!(issued.demo_otp.as_deref(), Some("123456"));

        let issued: OtpIssued = serde_json::from_value(json!({})).unwrap();
        assert_eq!(issued.demo_otp, None);
    }

    #[test]
    fn test_farmer_id_canonical_then_alias() {
        let login: VerifiedLogin = serde_json::from_value(json!({
            "token": "t",
            "farmer_id": "canon",
            "farmerId": "alias"
        }))
        .unwrap();
        assert_eq!(login.farmer_id(), Some("canon"));

        let login: VerifiedLogin =
            serde_json::from_value(json!({ "token": "t", "farmerId": "alias" })).unwrap();
        assert_eq!(login.farmer_id(), Some("alias"));

        let login: VerifiedLogin = serde_json::from_value(json!({ "token": "" })).unwrap();
        assert_eq!(login.token(), None);
        assert_eq!(login.farmer_id(), None);
    }
}
