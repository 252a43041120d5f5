// file: src/search/mod.rs
// description: relevance search engine over the content corpus
// reference: internal ranking logic

pub mod filters;
pub mod fuzzy;
pub mod scoring;
pub mod sort;
pub mod suggest;

pub use filters::{KindFilter, SearchFilters, SortBy, SortOrder};

use crate::config::{Config, ScoringConfig};
use crate::models::{ContentKind, Corpus, MatchType, Ranked, SearchResults, Searchable};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Stateless, synchronous relevance engine. Every call scores the supplied
/// corpus from scratch: no caching, no mutation of the input, no I/O.
///
/// Pipeline per call: score each item against the query, drop non-matches,
/// apply the filter dimensions, sort each collection, truncate to the
/// requested limit, then derive suggestions when nothing matched.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    weights: ScoringConfig,
    suggestion_limit: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl SearchEngine {
    pub fn new(weights: ScoringConfig) -> Self {
        Self {
            weights,
            suggestion_limit: 5,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            weights: config.scoring.clone(),
            suggestion_limit: config.search.suggestion_limit,
        }
    }

    pub fn search(&self, corpus: &Corpus, query: &str, filters: &SearchFilters) -> SearchResults {
        self.search_at(corpus, query, filters, Utc::now())
    }

    /// Same as [`search`](Self::search) with an explicit reference time for
    /// the recency boost, which keeps results reproducible in tests.
    pub fn search_at(
        &self,
        corpus: &Corpus,
        query: &str,
        filters: &SearchFilters,
        now: DateTime<Utc>,
    ) -> SearchResults {
        let query = query.trim().to_lowercase();

        let mut videos = if filters.wants(ContentKind::Video) {
            self.rank(&corpus.videos, ContentKind::Video, &query, filters, now)
        } else {
            Vec::new()
        };
        let mut galleries = if filters.wants(ContentKind::Gallery) {
            self.rank(&corpus.galleries, ContentKind::Gallery, &query, filters, now)
        } else {
            Vec::new()
        };
        let mut models = if filters.wants(ContentKind::Model) {
            self.rank(&corpus.models, ContentKind::Model, &query, filters, now)
        } else {
            Vec::new()
        };

        sort::sort_ranked(&mut videos, filters.sort_by, filters.sort_order);
        sort::sort_ranked(&mut galleries, filters.sort_by, filters.sort_order);
        sort::sort_ranked(&mut models, filters.sort_by, filters.sort_order);

        if let Some(limit) = filters.limit {
            videos.truncate(limit);
            galleries.truncate(limit);
            models.truncate(limit);
        }

        let total = videos.len() + galleries.len() + models.len();
        let suggestions = if !query.is_empty() && total == 0 {
            suggest::suggestions(corpus, &query, self.suggestion_limit)
        } else {
            Vec::new()
        };

        SearchResults {
            videos,
            galleries,
            models,
            total,
            suggestions,
        }
    }

    fn rank<T: Searchable + Clone>(
        &self,
        items: &[T],
        kind: ContentKind,
        query: &str,
        filters: &SearchFilters,
        now: DateTime<Utc>,
    ) -> Vec<Ranked<T>> {
        items
            .iter()
            .filter_map(|item| {
                // a malformed item is skipped, never aborts the call
                if item.display_name().trim().is_empty() {
                    debug!("skipping {} item with empty display name", kind);
                    return None;
                }

                let score = if query.is_empty() {
                    0
                } else {
                    scoring::score_item(item, query, &self.weights, now)
                };
                if !query.is_empty() && score <= 0 {
                    return None;
                }
                if !filters::passes(item, kind, filters) {
                    return None;
                }

                let match_type = if query.is_empty() {
                    MatchType::Fuzzy
                } else {
                    scoring::classify(item, query)
                };

                Some(Ranked {
                    item: item.clone(),
                    result_type: kind,
                    relevance_score: score,
                    match_type,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentItem, ModelProfile};
    use pretty_assertions::assert_eq;

    fn video(id: &str, title: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            keywords: vec![],
            tags: vec![],
            models: vec![],
            date: None,
            is_featured: false,
            category: None,
        }
    }

    fn profile(id: &str, name: &str) -> ModelProfile {
        ModelProfile {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            famous_for: None,
            instagram: None,
        }
    }

    fn demo_corpus(now: DateTime<Utc>) -> Corpus {
        let mut neon = video("v1", "Neon Dreams");
        neon.keywords = vec!["neon".into(), "dreams".into(), "aurora".into()];
        neon.tags = vec!["urban".into(), "moody".into()];
        neon.date = Some(now);
        neon.is_featured = true;

        let mut rooftop = video("v2", "Rooftop Golden Hour");
        rooftop.tags = vec!["fashion".into(), "studio".into()];
        rooftop.models = vec!["Alina".into()];
        rooftop.date = Some(now - chrono::Duration::days(90));

        let mut backstage = video("v3", "Backstage Diaries");
        backstage.is_featured = true;
        backstage.models = vec!["Elena".into()];

        Corpus {
            videos: vec![neon, rooftop, backstage, video("v4", "Fog Valley"), video("v5", "Harbor")],
            galleries: vec![video("g1", "Neon Streets"), video("g2", "Quiet Mornings")],
            models: vec![profile("m1", "Alina"), profile("m2", "Elena")],
        }
    }

    #[test]
    fn test_prefix_keyword_recency_featured_scenario() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let results = engine.search_at(&corpus, "neon", &SearchFilters::default(), now);

        // prefix 80 + keyword 40 + recency 15 + featured 20
        assert_eq!(results.videos.len(), 1);
        assert_eq!(results.videos[0].item.id, "v1");
        assert_eq!(results.videos[0].relevance_score, 155);
        assert_eq!(results.videos[0].match_type, MatchType::Tag);
        assert_eq!(results.galleries.len(), 1);
        assert!(results.suggestions.is_empty());
    }

    #[test]
    fn test_case_insensitive_queries_agree() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let upper = engine.search_at(&corpus, "ALINA", &SearchFilters::default(), now);
        let lower = engine.search_at(&corpus, "alina", &SearchFilters::default(), now);
        assert_eq!(upper, lower);
        assert_eq!(upper.models.len(), 1);
    }

    #[test]
    fn test_empty_query_keeps_every_item() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let results = engine.search_at(&corpus, "", &SearchFilters::default(), now);
        assert_eq!(results.total, corpus.len());
        assert!(results.videos.iter().all(|r| r.relevance_score == 0));
        // corpus order survives the relevance sort when all scores tie
        let ids: Vec<&str> = results.videos.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3", "v4", "v5"]);
    }

    #[test]
    fn test_idempotent_calls() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();
        let filters = SearchFilters::default();

        let first = engine.search_at(&corpus, "neon", &filters, now);
        let second = engine.search_at(&corpus, "neon", &filters, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_corpus_is_not_mutated() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let snapshot = corpus.clone();
        let engine = SearchEngine::default();

        engine.search_at(&corpus, "neon dreams", &SearchFilters::default(), now);
        engine.search_at(&corpus, "", &SearchFilters::default(), now);

        assert_eq!(corpus, snapshot);
    }

    #[test]
    fn test_featured_video_filter_with_empty_query() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let filters = SearchFilters {
            kind: KindFilter::Video,
            featured: true,
            ..Default::default()
        };
        let results = engine.search_at(&corpus, "", &filters, now);

        let ids: Vec<&str> = results.videos.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v3"]);
        assert!(results.galleries.is_empty());
        assert!(results.models.is_empty());
    }

    #[test]
    fn test_unmatched_query_produces_suggestions() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let results = engine.search_at(&corpus, "zzzznotfound", &SearchFilters::default(), now);
        assert_eq!(results.total, 0);
        assert!(results.suggestions.len() <= 5);

        // a truncated word misses but surfaces its completion as a chip
        let results = engine.search_at(&corpus, "backst zzz", &SearchFilters::default(), now);
        assert_eq!(results.total, 0);
        assert!(results.suggestions.contains(&"backstage".to_string()));
    }

    #[test]
    fn test_model_filter_keeps_associated_items() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let filters = SearchFilters {
            models: vec!["Alina".to_string(), "Elena".to_string()],
            ..Default::default()
        };
        let results = engine.search_at(&corpus, "", &filters, now);

        let ids: Vec<&str> = results.videos.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v3"]);
        assert_eq!(results.models.len(), 2);
        assert!(results.galleries.is_empty());
    }

    #[test]
    fn test_limit_truncates_each_collection() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let filters = SearchFilters {
            limit: Some(2),
            ..Default::default()
        };
        let results = engine.search_at(&corpus, "", &filters, now);
        assert_eq!(results.videos.len(), 2);
        assert_eq!(results.galleries.len(), 2);
        assert_eq!(results.models.len(), 2);
    }

    #[test]
    fn test_whitespace_query_is_trimmed() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let padded = engine.search_at(&corpus, "  neon  ", &SearchFilters::default(), now);
        let plain = engine.search_at(&corpus, "neon", &SearchFilters::default(), now);
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_empty_corpus_returns_empty_results() {
        let engine = SearchEngine::default();
        let results = engine.search(&Corpus::default(), "anything", &SearchFilters::default());
        assert_eq!(results.total, 0);
        assert!(results.suggestions.is_empty());
    }

    #[test]
    fn test_untitled_item_is_skipped_not_fatal() {
        let now = Utc::now();
        let mut corpus = demo_corpus(now);
        corpus.videos.push(video("v6", "   "));
        let engine = SearchEngine::default();

        let results = engine.search_at(&corpus, "", &SearchFilters::default(), now);
        assert_eq!(results.videos.len(), 5);
    }

    #[test]
    fn test_date_sort_orders_videos() {
        let now = Utc::now();
        let corpus = demo_corpus(now);
        let engine = SearchEngine::default();

        let filters = SearchFilters {
            kind: KindFilter::Video,
            sort_by: SortBy::Date,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let results = engine.search_at(&corpus, "", &filters, now);
        assert_eq!(results.videos[0].item.id, "v1");
        assert_eq!(results.videos[1].item.id, "v2");
    }
}
