//! Pages that forward raw JSON to an endpoint and show the raw result.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::{AdvisoryError, Result};
use crate::locale::Dictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// One of the generic "run and show JSON" pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PassthroughPage {
    Recommendations,
    Weather,
    Pests,
    SoilAnalysis,
    IrrigationPlan,
    MarketUpdates,
}

impl PassthroughPage {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Recommendations | Self::Weather | Self::Pests => "/dashboard",
            Self::SoilAnalysis => "/soil-analysis",
            Self::IrrigationPlan => "/irrigation-plan",
            Self::MarketUpdates => "/market-updates",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Self::SoilAnalysis | Self::IrrigationPlan => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    pub fn takes_input(self) -> bool {
        self.method() == HttpMethod::Post
    }

    pub fn title(self, dict: &Dictionary) -> &'static str {
        match self {
            Self::Recommendations => dict.recommendations,
            Self::Weather => dict.weather,
            Self::Pests => dict.pests,
            Self::SoilAnalysis => dict.soil,
            Self::IrrigationPlan => dict.irrigation,
            Self::MarketUpdates => dict.market,
        }
    }

    /// Turns the user's text into the JSON body to send.
    ///
    /// Blank input becomes `{}`. Text that is not JSON is rejected locally.
    /// GET pages never send a body.
    pub fn body_from_input(self, input: &str) -> Result<Option<serde_json::Value>> {
        if !self.takes_input() {
            return Ok(None);
        }
        if input.trim().is_empty() {
            return Ok(Some(serde_json::Value::Object(Default::default())));
        }
        serde_json::from_str(input)
            .map(Some)
            .map_err(|e| AdvisoryError::rejected("request body", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_endpoints_and_methods() {
        let table: Vec<_> = PassthroughPage::iter()
            .map(|p| (p.endpoint(), p.method().to_string()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("/dashboard", "GET".to_string()),
                ("/dashboard", "GET".to_string()),
                ("/dashboard", "GET".to_string()),
                ("/soil-analysis", "POST".to_string()),
                ("/irrigation-plan", "POST".to_string()),
                ("/market-updates", "GET".to_string()),
            ]
        );
    }

    #[test]
    fn test_body_from_input() {
        let page = PassthroughPage::SoilAnalysis;
        assert_eq!(page.body_from_input("").unwrap(), Some(json!({})));
        assert_eq!(
            page.body_from_input(r#"{"ph": 6.2}"#).unwrap(),
            Some(json!({ "ph": 6.2 }))
        );
        assert!(page.body_from_input("ph=6").unwrap_err().is_rejection());

        assert_eq!(
            PassthroughPage::MarketUpdates.body_from_input("ignored").unwrap(),
            None
        );
    }
}
