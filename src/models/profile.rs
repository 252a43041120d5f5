// file: src/models/profile.rs
// description: model profile entity
// reference: internal data structures

use crate::models::content::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub famous_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Searchable for ModelProfile {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn keywords(&self) -> &[String] {
        &[]
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    // A profile is associated with itself, so a models filter keeps the
    // profiles it names.
    fn model_names(&self) -> &[String] {
        std::slice::from_ref(&self.name)
    }

    fn date(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn is_featured(&self) -> bool {
        false
    }

    fn category(&self) -> Option<&str> {
        None
    }
}
