use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::catalog::CatalogContext;
use crate::shared::icons::icon;
use crate::shared::theme::{Theme, ThemeProvider};
use contracts::domain::Catalog;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match Catalog::load() {
        Ok(catalog) => {
            let default_theme = Theme::from_str(&catalog.app.default_theme);

            // Provide the AppGlobalContext store to the whole app via context.
            provide_context(AppGlobalContext::new(catalog.app.sidebar_open));
            provide_context(CatalogContext::new(catalog));

            view! {
                <ThemeProvider default_theme=default_theme>
                    <AppShell />
                </ThemeProvider>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            view! { <LoadError message=e.to_string() /> }.into_any()
        }
    }
}

/// Rendered in place of the shell when the embedded catalog is invalid.
#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="load-error">
            <div class="load-error__icon">{icon("alert-circle")}</div>
            <h1 class="load-error__title">"Unable to start the application"</h1>
            <pre class="load-error__message">{message}</pre>
        </div>
    }
}
