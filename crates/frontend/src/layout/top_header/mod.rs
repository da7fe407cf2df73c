//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Title and subtitle of the active view
//! - Theme toggle, notifications, messages and the user avatar

use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::catalog::{use_catalog, CatalogContext};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

fn heading(catalog: &CatalogContext, view: ActiveView) -> (String, String) {
    match view {
        ActiveView::Home => {
            let app = catalog.app();
            (
                format!("Welcome back, {}!", app.user_first_name()),
                "Here's what's happening with your analytics today".to_string(),
            )
        }
        ActiveView::Page(key) => {
            let schema = catalog.schema(key);
            (schema.title, schema.subtitle)
        }
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let catalog = use_catalog();
    let app = catalog.app();
    let initials = app.user_initials();

    let is_sidebar_visible = move || ctx.left_open.get();
    let current = Memo::new(move |_| heading(&catalog, ctx.active.get()));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("x") } else { icon("menu") }}
                </button>
                <div class="top-header__heading">
                    <h2 class="top-header__title">{move || current.get().0}</h2>
                    <p class="top-header__subtitle">{move || current.get().1}</p>
                </div>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <button class="top-header__icon-btn top-header__icon-btn--dot" title="Notifications">
                    {icon("bell")}
                </button>

                <button class="top-header__icon-btn" title="Messages">
                    {icon("message-square")}
                </button>

                <div class="top-header__avatar" title=app.user_name>
                    {initials}
                </div>
            </div>
        </div>
    }
}
