// file: src/models/results.rs
// description: ranked search result models with relevance scores
// reference: internal data structures

use crate::models::{ContentItem, ContentKind, ModelProfile};
use serde::{Deserialize, Serialize};

/// Why an item matched, independent of its numeric score. Drives the match
/// badge and the "did you mean" presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Tag,
    Description,
    Fuzzy,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Tag => "tag",
            MatchType::Description => "description",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

/// Ephemeral wrapper around a catalog entity, computed per search call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub result_type: ContentKind,
    pub relevance_score: i64,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub videos: Vec<Ranked<ContentItem>>,
    pub galleries: Vec<Ranked<ContentItem>>,
    pub models: Vec<Ranked<ModelProfile>>,
    pub total: usize,
    pub suggestions: Vec<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
