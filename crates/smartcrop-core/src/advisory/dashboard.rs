//! Dashboard snapshot returned by `GET /dashboard`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub recommendations: Vec<Recommendation>,
    pub soil: SoilHealth,
    pub weather: Weather,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    /// Suitability in `[0, 1]`.
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

impl Recommendation {
    /// Score as a whole percentage, clamped to `0..=100`.
    pub fn score_percent(&self) -> u8 {
        if self.score.is_nan() {
            return 0;
        }
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilHealth {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    #[serde(default)]
    pub advice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_snapshot() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({
            "recommendations": [{ "crop": "Wheat", "score": 0.87, "reason": "Loamy soil" }],
            "soil": {
                "ph": 6.5,
                "nitrogen": 40,
                "phosphorus": 20,
                "potassium": 30,
                "advice": "Add compost"
            },
            "weather": { "alerts": [{ "type": "Rain", "message": "Heavy rain tomorrow" }] },
            "notifications": [{ "title": "Mandi", "message": "Prices up" }, {}],
            "extra": "ignored"
        }))
        .unwrap();

        assert_eq!(snapshot.recommendations[0].score_percent(), 87);
        assert_eq!(snapshot.soil.nitrogen, 40.0);
        assert_eq!(snapshot.weather.alerts[0].kind, "Rain");
        assert_eq!(snapshot.notifications.len(), 2);
        assert_eq!(snapshot.notifications[1].title, None);
    }

    #[test]
    fn test_notifications_optional() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({
            "recommendations": [],
            "soil": { "ph": 7, "nitrogen": 1, "phosphorus": 2, "potassium": 3 },
            "weather": { "alerts": [] }
        }))
        .unwrap();
        assert!(snapshot.notifications.is_empty());
    }

    #[test]
    fn test_missing_soil_is_malformed() {
        let parsed = serde_json::from_value::<DashboardSnapshot>(json!({
            "recommendations": [],
            "weather": { "alerts": [] }
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_score_percent_clamps() {
        let rec = |score| Recommendation {
            score,
            ..Default::default()
        };
        assert_eq!(rec(0.444).score_percent(), 44);
        assert_eq!(rec(1.7).score_percent(), 100);
        assert_eq!(rec(-0.2).score_percent(), 0);
        assert_eq!(rec(f64::NAN).score_percent(), 0);
    }
}
