//! Government scheme search, `POST /schemes`.

use serde::{Deserialize, Serialize};

/// Body of the scheme search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemeQuery {
    pub state: String,
    pub crop: String,
}

impl SchemeQuery {
    pub fn new(state: impl Into<String>, crop: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            crop: crop.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SchemeResults {
    #[serde(default)]
    pub schemes: Vec<Scheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefit: String,
    #[serde(default)]
    pub link: String,
}
