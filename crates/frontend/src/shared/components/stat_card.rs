use crate::shared::icons::icon;
use contracts::shared::list_view::StatusTone;
use leptos::prelude::*;

/// Group digits by thousands with a thin separator ("12 480").
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "stat-card stat-card--success",
        StatusTone::Error => "stat-card stat-card--error",
        StatusTone::Warning => "stat-card stat-card--warning",
        StatusTone::Info => "stat-card stat-card--info",
        StatusTone::Neutral => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    value: u64,
    #[prop(optional)]
    tone: StatusTone,
    /// Optional line below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=tone_class(tone)>
            {icon_name.map(|name| view! {
                <div class="stat-card__icon">{icon(&name)}</div>
            })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_thousands(value)}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
