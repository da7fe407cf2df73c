//! Generic list page: header, controls bar, body, empty state and footer.
//!
//! Pages supply column headers and a renderer for one visible record; the
//! filtering and footer statistics come from [`PageData`].

pub mod state;

use self::state::create_state;
use crate::shared::components::empty_state::{empty_text, EmptyMessage};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_filter::StatusFilterBar;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::PageData;
use contracts::shared::list_view::{empty_state, ListRecord, StatusFilter, SummaryCounts};
use leptos::prelude::*;
use thaw::*;

/// Title and hint that replace the body while set.
pub type Placeholder = Option<(String, String)>;

/// "`shown` of `total`" while a search or status filter narrows the list.
fn shown_counter(shown: usize, total: usize, filtering: bool) -> Option<String> {
    filtering.then(|| format!("{} of {}", shown, total))
}

#[component]
pub fn RecordListPage<R, F>(
    /// `{entity}--list`
    page_id: &'static str,
    data: PageData<R>,
    /// Table headers; empty renders the body as a card grid
    #[prop(optional)]
    columns: Vec<&'static str>,
    /// Renders one visible record (a `TableRow` or a card)
    row: F,
    /// Shown between the header and the controls bar
    #[prop(optional)]
    banner: Option<ChildrenFn>,
    #[prop(optional)]
    placeholder: Option<Signal<Placeholder>>,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
    F: Fn(R, Signal<String>) -> AnyView + Clone + Send + Sync + 'static,
{
    let state = create_state();
    let schema = data.schema.clone();
    let summary = data.summary();
    let total = data.records.len();
    let data = StoredValue::new(data);
    let show_filters = RwSignal::new(true);
    let filters = schema.filters.clone();
    let filter_style = schema.filter_style;

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let status = Signal::derive(move || state.with(|s| s.status_filter.clone()));

    let visible = Signal::derive(move || {
        let filter = state.get();
        data.with_value(|d| d.visible(&filter).into_iter().cloned().collect::<Vec<R>>())
    });

    let empty_schema = schema.clone();
    let empty = Memo::new(move |_| {
        if let Some(text) = placeholder.and_then(|p| p.get()) {
            return Some(text);
        }
        empty_text(&empty_schema, empty_state(total, visible.with(Vec::len)))
    });

    let counter_text =
        move || shown_counter(visible.with(Vec::len), total, state.with(|s| s.is_active()));

    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.query = value);
    });
    let on_status = Callback::new(move |filter: StatusFilter| {
        log::debug!("Status filter: {}", filter.token());
        state.update(|s| s.status_filter = filter);
    });
    let on_refresh = move |_| {
        log::debug!("Resetting filters on {}", page_id);
        state.set(Default::default());
    };
    let on_create = {
        let item_label = schema.item_label.clone();
        move |_| log::debug!("Create requested for {}; catalog is read-only", item_label)
    };

    let item_key = |record: &R| record.id().value();

    let body = move || match empty.get() {
        Some((title, hint)) => view! { <EmptyMessage title=title hint=hint /> }.into_any(),
        None if columns.is_empty() => {
            let row = row.clone();
            view! {
                <div class="record-cards">
                    <For
                        each=move || visible.get()
                        key=item_key
                        children=move |record| row(record, query)
                    />
                </div>
            }
            .into_any()
        }
        None => {
            let row = row.clone();
            let headers = columns
                .iter()
                .copied()
                .map(|title| view! { <TableHeaderCell>{title}</TableHeaderCell> })
                .collect_view();
            view! {
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>{headers}</TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=item_key
                                children=move |record| row(record, query)
                            />
                        </TableBody>
                    </Table>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title=schema.title.clone()
                subtitle=schema.subtitle.clone()
                count=Signal::derive(counter_text)
            >
                <Button appearance=ButtonAppearance::Primary on_click=on_create>
                    {icon("plus")}
                    "Create"
                </Button>
            </PageHeader>

            {banner.map(|b| b())}

            <div class="page__content">
                <div class="list-controls">
                    <SearchInput
                        value=query
                        on_change=on_search
                        placeholder=schema.search_placeholder.clone()
                    />
                    <Show when=move || show_filters.get()>
                        <StatusFilterBar
                            options=filters.clone()
                            filter_style=filter_style
                            value=status
                            on_change=on_status
                        />
                    </Show>
                    <div class="list-controls__actions">
                        <Button appearance=ButtonAppearance::Subtle on_click=on_refresh>
                            {icon("refresh")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| show_filters.update(|v| *v = !*v)
                        >
                            {icon("filter")}
                        </Button>
                    </div>
                </div>

                {body}

                <StatsFooter total_label=schema.total_label.clone() summary=summary />
            </div>
        </PageFrame>
    }
}

/// Footer statistics, computed over the whole collection.
#[component]
pub fn StatsFooter(total_label: String, summary: SummaryCounts) -> impl IntoView {
    let counters = summary
        .counters
        .into_iter()
        .map(|c| {
            view! {
                <div class=format!("list-stats__item list-stats__item--{}", c.tone.as_str())>
                    <span class="list-stats__value">{c.value}</span>
                    <span class="list-stats__label">{c.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="list-stats">
            <div class="list-stats__item">
                <span class="list-stats__value">{summary.total}</span>
                <span class="list-stats__label">{total_label}</span>
            </div>
            {counters}
        </div>
    }
}
