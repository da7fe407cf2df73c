//! Status filter control: a tab strip or a drop-down, per page schema.

use crate::shared::components::ui::StatusSelect;
use contracts::shared::list_view::{FilterOption, FilterStyle, StatusFilter};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatusFilterBar(
    options: Vec<FilterOption>,
    filter_style: FilterStyle,
    #[prop(into)] value: Signal<StatusFilter>,
    #[prop(into)] on_change: Callback<StatusFilter>,
) -> impl IntoView {
    match filter_style {
        FilterStyle::Tabs => {
            let buttons = options
                .into_iter()
                .map(|option| {
                    let token = option.value.clone();
                    let token_for_class = option.value.clone();
                    let appearance = Signal::derive(move || {
                        if value.get().token() == token_for_class {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    });
                    view! {
                        <Button
                            appearance=appearance
                            size=ButtonSize::Small
                            on_click=move |_| on_change.run(StatusFilter::from_token(&token))
                        >
                            {option.label().to_string()}
                        </Button>
                    }
                })
                .collect_view();

            view! {
                <div class="status-filter status-filter--tabs">
                    <Flex gap=FlexGap::Small>{buttons}</Flex>
                </div>
            }
            .into_any()
        }
        FilterStyle::Select => {
            view! {
                <div class="status-filter status-filter--select">
                    <StatusSelect options=options value=value on_change=on_change />
                </div>
            }
            .into_any()
        }
    }
}
