//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_report--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part is the module directory, so an id copied from the DOM
//! inspector leads straight to `domain/a003_report/`.

/// Searchable, filterable collection of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview page built from several collections.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format and
/// names a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
