use contracts::shared::list_view::{FilterOption, StatusFilter};
use leptos::prelude::*;

/// `(token, label)` pairs in configured order.
fn option_entries(options: &[FilterOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|option| (option.value.clone(), option.label().to_string()))
        .collect()
}

/// Drop-down over the configured status options of a page.
#[component]
pub fn StatusSelect(
    options: Vec<FilterOption>,
    #[prop(into)] value: Signal<StatusFilter>,
    #[prop(into)] on_change: Callback<StatusFilter>,
) -> impl IntoView {
    let entries = option_entries(&options)
        .into_iter()
        .map(|(token, label)| {
            let current = token.clone();
            let is_selected = move || value.get().token() == current;
            view! { <option value=token selected=is_selected>{label}</option> }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <select
                class="form__select"
                on:change=move |ev| {
                    on_change.run(StatusFilter::from_token(&event_target_value(&ev)))
                }
            >
                {entries}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, label: Option<&str>) -> FilterOption {
        FilterOption {
            value: value.to_string(),
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_entries_fall_back_to_token_label() {
        let options = vec![
            option("All", Some("All Statuses")),
            option("ACTIVE", Some("Active")),
            option("Paused", None),
        ];
        assert_eq!(
            option_entries(&options),
            vec![
                ("All".to_string(), "All Statuses".to_string()),
                ("ACTIVE".to_string(), "Active".to_string()),
                ("Paused".to_string(), "Paused".to_string()),
            ]
        );
    }
}
