use contracts::shared::list_view::StatusTone;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "info", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "info" => "badge--info",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Record status pill coloured by its tone.
#[component]
pub fn StatusBadge(
    tone: StatusTone,
    /// Status text as stored on the record
    #[prop(into)]
    status: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status badge--{}", tone.as_str())>
            <span class="badge__dot"></span>
            {status}
        </span>
    }
}
