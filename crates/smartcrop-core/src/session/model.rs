//! Session domain model.

use serde::{Deserialize, Serialize};

/// The authenticated state of the client.
///
/// Both fields are empty, or both are set. A token restored without a farmer id is
/// tolerated and surfaces as [`Session::farmer_display`] returning `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque token issued by the advisory service.
    pub token: String,
    pub farmer_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, farmer_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            farmer_id: farmer_id.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// The token, if any. Views use this to decide whether to issue a call at all.
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    /// Farmer id to show in the header, or `None` when degraded or logged out.
    pub fn farmer_display(&self) -> Option<&str> {
        if self.is_authenticated() && !self.farmer_id.is_empty() {
            Some(&self.farmer_id)
        } else {
            None
        }
    }

    /// True when a token is present without a farmer id.
    pub fn is_degraded(&self) -> bool {
        self.is_authenticated() && self.farmer_id.is_empty()
    }
}
