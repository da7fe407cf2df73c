//! Placeholder shown in place of an empty list body.

use crate::shared::icons::icon;
use contracts::shared::list_view::{EmptyState, PageSchema};
use leptos::prelude::*;

/// Title and hint for an empty list body; `None` when records are visible.
pub fn empty_text(schema: &PageSchema, state: EmptyState) -> Option<(String, String)> {
    match state {
        EmptyState::Populated => None,
        EmptyState::NoMatches => Some((
            format!("No {} found", schema.item_label),
            "Try adjusting your search or filters".to_string(),
        )),
        EmptyState::NoRecords => Some((
            format!("No {} yet", schema.item_label),
            format!("Create your first {} to see it here", singular(&schema.item_label)),
        )),
    }
}

fn singular(label: &str) -> &str {
    label.strip_suffix('s').unwrap_or(label)
}

#[component]
pub fn EmptyMessage(
    #[prop(into)] title: String,
    #[prop(into)] hint: String,
    #[prop(optional, into)] icon_name: Option<String>,
) -> impl IntoView {
    let icon_name = icon_name.unwrap_or_else(|| "search".to_string());
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(&icon_name)}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">{hint}</p>
        </div>
    }
}
