use super::use_theme;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header button switching between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || ctx.theme.get().toggled().display_name()
        >
            {move || if ctx.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
