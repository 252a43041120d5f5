// file: src/models/content.rs
// description: content item model and the searchable view shared by all result kinds
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit tag for the three result kinds. Set at ingestion time so the
/// scorer and the renderer branch on a tag instead of probing field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Gallery,
    Model,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Gallery => "gallery",
            ContentKind::Model => "model",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A video or gallery entry in the catalog.
///
/// `keywords` is the precomputed, lowercase token list (title words, model
/// names, tags, category). `date` tolerates absence so one malformed entry
/// never poisons a whole catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Uniform read-only view over catalog entities so a single scorer serves
/// videos, galleries and model profiles. Kinds without a field report the
/// neutral value (empty slice, `None`, `false`).
pub trait Searchable {
    fn display_name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn keywords(&self) -> &[String];
    fn tags(&self) -> &[String];
    fn model_names(&self) -> &[String];
    fn date(&self) -> Option<DateTime<Utc>>;
    fn is_featured(&self) -> bool;
    fn category(&self) -> Option<&str>;

    /// Derived popularity used by the `popular` sort mode.
    fn popularity(&self) -> i64 {
        let featured = if self.is_featured() { 1000 } else { 0 };
        featured + self.keywords().len() as i64 * 10 + self.tags().len() as i64 * 5
    }
}

impl Searchable for ContentItem {
    fn display_name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn model_names(&self) -> &[String] {
        &self.models
    }

    fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
