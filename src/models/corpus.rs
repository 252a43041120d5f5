// file: src/models/corpus.rs
// description: in-memory corpus of all searchable collections
// reference: internal data structures

use crate::models::{ContentItem, ModelProfile};
use serde::{Deserialize, Serialize};

/// Everything searchable at call time. Doubles as the on-disk catalog shape;
/// an absent collection deserializes as an empty list rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub videos: Vec<ContentItem>,
    #[serde(default)]
    pub galleries: Vec<ContentItem>,
    #[serde(default)]
    pub models: Vec<ModelProfile>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.videos.len() + self.galleries.len() + self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All display names, corpus order: videos, galleries, models.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.videos
            .iter()
            .map(|v| v.title.as_str())
            .chain(self.galleries.iter().map(|g| g.title.as_str()))
            .chain(self.models.iter().map(|m| m.name.as_str()))
    }
}
