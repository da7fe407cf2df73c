use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::record_list::RecordListPage;
use contracts::domain::a001_data_source::DataSource;
use leptos::prelude::*;
use thaw::*;

const PAGE_ID: &str = "a001_data_source--list";
const COLUMNS: [&str; 6] = ["Name", "Type", "Database", "Status", "Last Synced", "Actions"];

#[component]
#[allow(non_snake_case)]
pub fn DataSourceList() -> impl IntoView {
    let data = use_catalog().with(|c| c.data_sources.clone());
    let schema = data.schema.clone();

    let row = move |source: DataSource, query: Signal<String>| {
        let tone = schema.status_tone(&source.status);
        let name = source.name.clone();
        let database = source.database.clone();
        let connected_class = if source.is_connected() {
            "record-icon record-icon--success"
        } else {
            "record-icon"
        };
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class=connected_class>{icon("database")}</span>
                        <span class="record-name">
                            {move || highlight_matches(&name, &query.get())}
                        </span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>{source.source_type}</TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <code class="record-code">
                            {move || highlight_matches(&database, &query.get())}
                        </code>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <StatusBadge tone=tone status=source.status />
                </TableCell>
                <TableCell>{source.last_synced}</TableCell>
                <TableCell>
                    <span class="record-actions">{icon("more-vertical")}</span>
                </TableCell>
            </TableRow>
        }
        .into_any()
    };

    view! {
        <RecordListPage page_id=PAGE_ID data=data columns=COLUMNS.to_vec() row=row />
    }
}
