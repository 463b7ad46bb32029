//! Supported interface languages.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{AdvisoryError, Result};

/// A language the interface is fully translated into.
///
/// The set is closed: adding a variant requires adding a complete
/// [`Dictionary`](super::Dictionary) for it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Pa,
    Ta,
}

impl Language {
    /// The persisted code, e.g. `"hi"`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Pa => "pa",
            Language::Ta => "ta",
        }
    }

    /// Name of the language written in itself, as shown in the language selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Pa => "ਪੰਜਾਬੀ",
            Language::Ta => "தமிழ்",
        }
    }

    /// Parses a code, rejecting anything outside the supported set.
    ///
    /// Surrounding whitespace is ignored; the comparison is case-insensitive.
    pub fn from_code(code: &str) -> Result<Self> {
        code.trim()
            .to_ascii_lowercase()
            .parse::<Language>()
            .map_err(|_| {
                AdvisoryError::rejected(
                    format!("locale code '{code}'"),
                    format!("supported codes are {}", Self::supported_codes().join(", ")),
                )
            })
    }

    pub fn all() -> impl Iterator<Item = Language> {
        Language::iter()
    }

    pub fn supported_codes() -> Vec<&'static str> {
        Language::iter().map(Language::code).collect()
    }
}
