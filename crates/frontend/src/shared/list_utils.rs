/// List helpers: debounced search input and match highlighting
use contracts::shared::list_view::highlight_segments;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Render `text` with every case-insensitive occurrence of `query` marked.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = highlight_segments(text, query)
        .into_iter()
        .map(|segment| {
            let content = segment.text.to_string();
            if segment.matched {
                view! { <mark class="search-highlight">{content}</mark> }.into_any()
            } else {
                view! { <span>{content}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Placeholder for empty optional columns.
pub fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

/// Search field with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the settled value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Follow external resets of the filter
    Effect::new(move |_| {
        if value.get().is_empty() && !input_value.get_untracked().is_empty() {
            pending.update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.cancel();
                }
            });
            input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        pending.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            *slot = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                on_change.run(new_value);
            }));
        });
    };

    let clear_filter = move |_| {
        pending.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
        });
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().is_empty()>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Monthly KPIs"), "Monthly KPIs");
    }
}
