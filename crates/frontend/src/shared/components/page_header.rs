use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Title row of a list page: heading, optional result counter and actions.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Shown next to the title ("3 of 10")
    #[prop(optional, into)]
    count: MaybeProp<String>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <div class="page__header-text">
                    <div class="page__title-row">
                        <h1 class="page__title">{title}</h1>
                        {move || count.get().map(|c| view! {
                            <Badge variant="primary".to_string()>{c}</Badge>
                        })}
                    </div>
                    {move || subtitle.get().map(|s| view! {
                        <p class="page__subtitle">{s}</p>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
