use crate::domain::common::{PageKey, RecordId};
use thiserror::Error;

/// Failures while loading the catalog configuration and seed collections.
///
/// The list view derivations themselves never fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to parse seed data for {page}: {source}")]
    Seed {
        page: PageKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("page {0} is not configured")]
    UnknownPage(PageKey),

    #[error("page {0} is configured more than once")]
    DuplicatePage(PageKey),

    #[error("page {page}: {reason}")]
    InvalidFilters { page: PageKey, reason: String },

    #[error("page {page}: counter '{key}' is declared more than once")]
    DuplicateCounter { page: PageKey, key: String },

    #[error("page {page}: counter key 'total' is reserved")]
    ReservedCounter { page: PageKey },

    #[error("page {page}: badge refers to unknown counter '{key}'")]
    UnknownBadge { page: PageKey, key: String },

    #[error("page {page}: record id {id} is used more than once")]
    DuplicateId { page: PageKey, id: RecordId },

    #[error("page {page}: record {id} has an empty name")]
    EmptyName { page: PageKey, id: RecordId },
}
