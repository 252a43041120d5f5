// file: src/repository/store.rs
// description: file-backed catalog store with explicit load, save and seed
// reference: internal persistence layer

use crate::error::{CatalogError, Result};
use crate::models::{ContentItem, Corpus, ModelProfile};
use crate::repository::{seed, ContentRepository};
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// JSON catalog on disk. Loading, saving and seeding are all explicit calls;
/// nothing is written as a side effect of a read.
pub struct JsonStore {
    storage_path: PathBuf,
    pretty: bool,
    catalog: Corpus,
}

impl JsonStore {
    /// Opens a store at `path`, loading the catalog if the file exists.
    /// A missing file is an empty catalog, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let storage_path = path.into();

        if let Some(parent) = storage_path.parent() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::Storage {
                path: storage_path.clone(),
                source: e,
            })?;
        }

        let mut store = Self {
            storage_path,
            pretty: true,
            catalog: Corpus::default(),
        };
        store.load()?;

        Ok(store)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn load(&mut self) -> Result<()> {
        if !self.storage_path.exists() {
            debug!("no catalog file at {:?}, starting empty", self.storage_path);
            self.catalog = Corpus::default();
            return Ok(());
        }

        let contents =
            fs::read_to_string(&self.storage_path).map_err(|e| CatalogError::Storage {
                path: self.storage_path.clone(),
                source: e,
            })?;

        let root: serde_json::Value = serde_json::from_str(&contents)?;
        self.catalog = Corpus {
            videos: decode_collection(&root, "videos"),
            galleries: decode_collection(&root, "galleries"),
            models: decode_collection(&root, "models"),
        };
        self.drop_invalid_entries();

        info!(
            "Loaded catalog: {} videos, {} galleries, {} models",
            self.catalog.videos.len(),
            self.catalog.galleries.len(),
            self.catalog.models.len()
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(&self.catalog)?
        } else {
            serde_json::to_string(&self.catalog)?
        };

        fs::write(&self.storage_path, contents).map_err(|e| CatalogError::Storage {
            path: self.storage_path.clone(),
            source: e,
        })?;

        debug!("Saved {} catalog entries", self.catalog.len());
        Ok(())
    }

    /// Writes the demo catalog. Refuses to overwrite a non-empty catalog
    /// unless `force` is set; returns whether anything was written.
    pub fn seed(&mut self, force: bool) -> Result<bool> {
        if !self.catalog.is_empty() && !force {
            info!("Catalog already populated, skipping seed (use --force to reseed)");
            return Ok(false);
        }

        self.catalog = seed::demo_catalog();
        self.save()?;
        info!("Seeded demo catalog with {} entries", self.catalog.len());
        Ok(true)
    }

    /// Deletes the catalog file and empties the in-memory collections.
    pub fn purge(&mut self) -> Result<()> {
        if self.storage_path.exists() {
            fs::remove_file(&self.storage_path).map_err(|e| CatalogError::Storage {
                path: self.storage_path.clone(),
                source: e,
            })?;
        }
        self.catalog = Corpus::default();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn drop_invalid_entries(&mut self) {
        let keep_item = |item: &ContentItem| match Validator::validate_content_item(item) {
            Ok(()) => true,
            Err(e) => {
                warn!("dropping invalid catalog item {:?}: {}", item.id, e);
                false
            }
        };
        self.catalog.videos.retain(keep_item);
        self.catalog.galleries.retain(keep_item);
        self.catalog.models.retain(|m| match Validator::validate_model(m) {
            Ok(()) => true,
            Err(e) => {
                warn!("dropping invalid model profile {:?}: {}", m.id, e);
                false
            }
        });
    }
}

/// Decodes one catalog collection leniently: a missing or non-list value is
/// an empty collection, and an undecodable entry is dropped on its own
/// instead of poisoning the whole load.
fn decode_collection<T: serde::de::DeserializeOwned>(
    root: &serde_json::Value,
    key: &str,
) -> Vec<T> {
    let Some(value) = root.get(key) else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        if !value.is_null() {
            warn!("catalog collection {:?} is not a list, treating as empty", key);
        }
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("dropping undecodable {} entry: {}", key, e);
                None
            }
        })
        .collect()
}

impl ContentRepository for JsonStore {
    fn list_videos(&self) -> &[ContentItem] {
        &self.catalog.videos
    }

    fn list_galleries(&self) -> &[ContentItem] {
        &self.catalog.galleries
    }

    fn list_models(&self) -> &[ModelProfile] {
        &self.catalog.models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("catalog.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        {
            let mut store = JsonStore::open(&path).unwrap();
            assert!(store.seed(false).unwrap());
        }

        let store = JsonStore::open(&path).unwrap();
        assert!(!store.is_empty());
        assert!(!store.list_videos().is_empty());
        assert!(!store.list_models().is_empty());

        let corpus = store.corpus();
        assert_eq!(corpus.len(), store.len());
    }

    #[test]
    fn test_seed_is_explicit_and_guarded() {
        let dir = tempdir().unwrap();
        let mut store = JsonStore::open(dir.path().join("catalog.json")).unwrap();

        assert!(store.seed(false).unwrap());
        // second seed without force is a no-op
        assert!(!store.seed(false).unwrap());
        assert!(store.seed(true).unwrap());
    }

    #[test]
    fn test_absent_collections_become_empty_lists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"videos":[{"id":"v1","title":"Solo"}]}"#).unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.list_videos().len(), 1);
        assert!(store.list_galleries().is_empty());
        assert!(store.list_models().is_empty());
    }

    #[test]
    fn test_null_collection_loads_as_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"videos":[{"id":"v1","title":"Solo"}],"galleries":null}"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.list_videos().len(), 1);
        assert!(store.list_galleries().is_empty());
    }

    #[test]
    fn test_undecodable_entry_does_not_poison_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "videos": [
                    {"id":"v1","title":"Kept"},
                    {"id":"v2","title":"Bad date","date":"not-a-date"},
                    "not-an-object"
                ]
            }"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.list_videos().len(), 1);
        assert_eq!(store.list_videos()[0].id, "v1");
    }

    #[test]
    fn test_invalid_entries_are_dropped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "videos": [
                    {"id":"v1","title":"Kept"},
                    {"id":"","title":"No id"},
                    {"id":"v3","title":"   "}
                ],
                "models": [{"id":"m1","name":""}]
            }"#,
        )
        .unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.list_videos().len(), 1);
        assert_eq!(store.list_videos()[0].id, "v1");
        assert!(store.list_models().is_empty());
    }

    #[test]
    fn test_purge_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.seed(false).unwrap();
        assert!(path.exists());

        store.purge().unwrap();
        assert!(!path.exists());
        assert!(store.is_empty());
    }
}
