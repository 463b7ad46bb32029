//! Keys of the persisted preference map.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A key in the persisted preference map.
///
/// The string forms are what end up in `state.toml`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum StorageKey {
    #[serde(rename = "lang")]
    #[strum(serialize = "lang")]
    Lang,
    #[serde(rename = "token")]
    #[strum(serialize = "token")]
    Token,
    #[serde(rename = "farmerId")]
    #[strum(serialize = "farmerId")]
    FarmerId,
}

impl StorageKey {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}
