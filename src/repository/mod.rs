// file: src/repository/mod.rs
// description: content repository module exports
// reference: internal module structure

pub mod seed;
pub mod store;

pub use store::JsonStore;

use crate::models::{ContentItem, Corpus, ModelProfile};

/// Read side of the catalog: already-materialized in-memory collections the
/// search engine consumes. Implementations decide where the data lives.
pub trait ContentRepository {
    fn list_videos(&self) -> &[ContentItem];
    fn list_galleries(&self) -> &[ContentItem];
    fn list_models(&self) -> &[ModelProfile];

    fn corpus(&self) -> Corpus {
        Corpus {
            videos: self.list_videos().to_vec(),
            galleries: self.list_galleries().to_vec(),
            models: self.list_models().to_vec(),
        }
    }
}
