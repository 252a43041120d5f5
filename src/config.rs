// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CatalogError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub scoring: ScoringConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub catalog_path: PathBuf,
    pub pretty: bool,
}

/// Weight table shared by every scoring call site. The original application
/// duplicated these constants across the search page and the search modal;
/// here there is exactly one table, loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub title_exact: i64,
    pub title_prefix: i64,
    pub title_substring: i64,
    pub description: i64,
    pub keyword: i64,
    pub tag: i64,
    pub recency_week: i64,
    pub recency_month: i64,
    pub featured: i64,
    pub fuzzy_word: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub suggestion_limit: usize,
    pub result_limit: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/catalog.json"),
            pretty: true,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_exact: 100,
            title_prefix: 80,
            title_substring: 60,
            description: 30,
            keyword: 40,
            tag: 35,
            recency_week: 15,
            recency_month: 10,
            featured: 20,
            fuzzy_word: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 5,
            result_limit: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LUXE_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.search.suggestion_limit == 0 {
            return Err(CatalogError::Config(
                "suggestion_limit must be greater than 0".to_string(),
            ));
        }

        let s = &self.scoring;
        if s.title_exact < s.title_prefix || s.title_prefix < s.title_substring {
            return Err(CatalogError::Config(
                "title weights must satisfy exact >= prefix >= substring".to_string(),
            ));
        }

        Ok(())
    }
}
