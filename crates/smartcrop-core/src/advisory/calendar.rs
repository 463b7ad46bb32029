//! Crop calendar returned by `GET /calendar`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    #[serde(default)]
    pub items: Vec<CalendarItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub crop: String,
    pub phase: String,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl CalendarItem {
    /// Parses `date` as RFC 3339 or `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// Date for display, e.g. `15 Jun 2025`; the raw string when it does not parse.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%d %b %Y").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(date: &str) -> CalendarItem {
        CalendarItem {
            crop: "Rice".into(),
            phase: "Sowing".into(),
            date: date.into(),
            note: None,
        }
    }

    #[test]
    fn test_display_date_formats() {
        assert_eq!(item("2025-06-15").display_date(), "15 Jun 2025");
        assert_eq!(item("2025-06-15T08:30:00+05:30").display_date(), "15 Jun 2025");
        assert_eq!(item("next monsoon").display_date(), "next monsoon");
    }

    #[test]
    fn test_blank_note_hidden() {
        let mut it = item("2025-06-15");
        it.note = Some("  ".into());
        assert_eq!(it.note(), None);
        it.note = Some("Use certified seed".into());
        assert_eq!(it.note(), Some("Use certified seed"));
    }

    #[test]
    fn test_items_default_to_empty() {
        let parsed: CalendarResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }
}
