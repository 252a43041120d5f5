// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod utils;

pub use config::{Config, ScoringConfig, SearchConfig, StorageConfig};
pub use error::{CatalogError, Result};
pub use models::{
    ContentItem, ContentKind, Corpus, MatchType, ModelProfile, Ranked, SearchResults, Searchable,
};
pub use repository::{ContentRepository, JsonStore};
pub use search::{KindFilter, SearchEngine, SearchFilters, SortBy, SortOrder};
pub use utils::Validator;
