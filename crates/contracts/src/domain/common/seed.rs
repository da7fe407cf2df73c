use super::PageKey;
use crate::shared::error::CatalogError;
use serde::de::DeserializeOwned;

/// Parse a page's embedded seed collection.
pub fn parse_seed<R: DeserializeOwned>(page: PageKey, json: &str) -> Result<Vec<R>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Seed { page, source })
}
