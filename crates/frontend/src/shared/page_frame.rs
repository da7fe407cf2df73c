//! PageFrame: root wrapper of every page shown in the content area.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root and picks the BEM
/// modifier from the category (`page` or `page page--dashboard`).
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a003_report--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
