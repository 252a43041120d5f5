// file: src/utils/validation.rs
// description: catalog entry validation helpers
// reference: input validation patterns

use crate::error::{CatalogError, Result};
use crate::models::{ContentItem, ModelProfile};

pub struct Validator;

impl Validator {
    pub fn validate_content_item(item: &ContentItem) -> Result<()> {
        if item.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "content item id is empty".to_string(),
            ));
        }

        if item.title.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "content item {} has an empty title",
                item.id
            )));
        }

        // keywords are the precomputed lowercase token list
        if let Some(bad) = item.keywords.iter().find(|k| **k != k.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "content item {} has a non-lowercase keyword: {}",
                item.id, bad
            )));
        }

        Ok(())
    }

    pub fn validate_model(model: &ModelProfile) -> Result<()> {
        if model.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "model profile id is empty".to_string(),
            ));
        }

        if model.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "model profile {} has an empty name",
                model.id
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max_length).collect();
            format!("{}...", cut)
        }
    }
}
