// file: src/search/scoring.rs
// description: per-item relevance scoring and match classification
// reference: internal ranking logic

use crate::config::ScoringConfig;
use crate::models::{MatchType, Searchable};
use crate::search::fuzzy;
use chrono::{DateTime, Utc};

/// Integer bonus sum for one item against a trimmed, lowercased query.
/// No normalization, no cap. A total of 0 means the query did not match.
pub fn score_item<T: Searchable>(
    item: &T,
    query: &str,
    weights: &ScoringConfig,
    now: DateTime<Utc>,
) -> i64 {
    let name = item.display_name().to_lowercase();
    let mut score = 0;

    // mutually exclusive, highest wins
    if name == query {
        score += weights.title_exact;
    } else if name.starts_with(query) {
        score += weights.title_prefix;
    } else if name.contains(query) {
        score += weights.title_substring;
    }

    if let Some(description) = item.description() {
        if description.to_lowercase().contains(query) {
            score += weights.description;
        }
    }

    // keywords are lowercase by invariant, tags are case-arbitrary
    if item.keywords().iter().any(|k| k.contains(query)) {
        score += weights.keyword;
    }
    if item.tags().iter().any(|t| t.to_lowercase().contains(query)) {
        score += weights.tag;
    }

    score += weights.fuzzy_word * fuzzy::matching_query_words(query, &name) as i64;

    // recency and featured only amplify a textual hit; on their own they
    // would keep every fresh or featured item alive for any query
    if score == 0 {
        return 0;
    }

    if let Some(date) = item.date() {
        let age_days = now.signed_duration_since(date).num_days();
        if age_days < 7 {
            score += weights.recency_week;
        } else if age_days < 30 {
            score += weights.recency_month;
        }
    }

    if item.is_featured() {
        score += weights.featured;
    }

    score
}

/// Match classification for badges and "did you mean", independent of the
/// numeric score. Precedence: exact name, full-keyword, description, fuzzy.
pub fn classify<T: Searchable>(item: &T, query: &str) -> MatchType {
    if item.display_name().to_lowercase() == query {
        return MatchType::Exact;
    }
    if item.keywords().iter().any(|k| k == query) {
        return MatchType::Tag;
    }
    if let Some(description) = item.description() {
        if description.to_lowercase().contains(query) {
            return MatchType::Description;
        }
    }
    MatchType::Fuzzy
}
