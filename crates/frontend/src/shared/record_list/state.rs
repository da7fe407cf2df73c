use contracts::shared::list_view::FilterState;
use leptos::prelude::*;

/// Search and status selection of one mounted list page.
///
/// Owned by the page component, so it is discarded when the user navigates
/// away.
pub fn create_state() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}
