//! Catalog access for components.

use contracts::domain::common::PageKey;
use contracts::domain::Catalog;
use contracts::shared::config::AppConfig;
use contracts::shared::list_view::PageSchema;
use leptos::prelude::*;

/// Read-only catalog shared through context. Records never change during a
/// session, so nothing here is reactive.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    catalog: StoredValue<Catalog>,
}

impl CatalogContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn with<T>(&self, f: impl FnOnce(&Catalog) -> T) -> T {
        self.catalog.with_value(f)
    }

    pub fn app(&self) -> AppConfig {
        self.with(|c| c.app.clone())
    }

    pub fn schema(&self, key: PageKey) -> PageSchema {
        self.with(|c| c.schema(key).clone())
    }
}

pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not found")
}
