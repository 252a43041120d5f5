// file: src/search/filters.rs
// description: search filter set, sort modes and per-item filter predicates
// reference: internal ranking logic

use crate::models::{ContentKind, Searchable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Video,
    Gallery,
    Model,
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "video" => Ok(KindFilter::Video),
            "gallery" => Ok(KindFilter::Gallery),
            "model" => Ok(KindFilter::Model),
            other => Err(format!("unknown result kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Title,
    Popular,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            "title" => Ok(SortBy::Title),
            "popular" => Ok(SortBy::Popular),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Independently combinable filter dimensions, ANDed together.
/// Tags require every listed tag; models require at least one listed model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub kind: KindFilter,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub models: Vec<String>,
    pub featured: bool,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub limit: Option<usize>,
}

impl SearchFilters {
    pub fn wants(&self, kind: ContentKind) -> bool {
        match self.kind {
            KindFilter::All => true,
            KindFilter::Video => kind == ContentKind::Video,
            KindFilter::Gallery => kind == ContentKind::Gallery,
            KindFilter::Model => kind == ContentKind::Model,
        }
    }
}

/// Applies every per-item filter dimension except the kind restriction, which
/// drops whole collections upstream. The featured toggle binds videos only.
pub fn passes<T: Searchable>(item: &T, kind: ContentKind, filters: &SearchFilters) -> bool {
    if filters.featured && kind == ContentKind::Video && !item.is_featured() {
        return false;
    }

    if let Some(category) = &filters.category {
        match item.category() {
            Some(c) if c.eq_ignore_ascii_case(category) => {}
            _ => return false,
        }
    }

    if !filters.tags.is_empty() {
        let item_tags: Vec<String> = item.tags().iter().map(|t| t.to_lowercase()).collect();
        let all_present = filters
            .tags
            .iter()
            .all(|t| item_tags.contains(&t.to_lowercase()));
        if !all_present {
            return false;
        }
    }

    if !filters.models.is_empty() {
        let wanted: Vec<String> = filters.models.iter().map(|m| m.to_lowercase()).collect();
        let any_present = item
            .model_names()
            .iter()
            .any(|m| wanted.contains(&m.to_lowercase()));
        if !any_present {
            return false;
        }
    }

    if filters.date_from.is_some() || filters.date_to.is_some() {
        let Some(date) = item.date() else {
            return false;
        };
        if let Some(from) = filters.date_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = filters.date_to {
            if date > to {
                return false;
            }
        }
    }

    true
}
