// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod content;
pub mod corpus;
pub mod profile;
pub mod results;

pub use content::{ContentItem, ContentKind, Searchable};
pub use corpus::Corpus;
pub use profile::ModelProfile;
pub use results::{MatchType, Ranked, SearchResults};
