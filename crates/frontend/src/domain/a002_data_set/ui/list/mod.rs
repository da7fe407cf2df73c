use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::record_list::RecordListPage;
use contracts::domain::a002_data_set::DataSet;
use leptos::prelude::*;
use thaw::*;

const PAGE_ID: &str = "a002_data_set--list";
const COLUMNS: [&str; 6] = ["Name", "Description", "Groups", "Status", "Updated", "Actions"];

#[component]
#[allow(non_snake_case)]
pub fn DataSetList() -> impl IntoView {
    let data = use_catalog().with(|c| c.data_sets.clone());
    let schema = data.schema.clone();

    let row = move |set: DataSet, query: Signal<String>| {
        let tone = schema.status_tone(&set.status);
        let name = set.name.clone();
        let description = or_dash(&set.description);
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="record-icon">{icon("layers")}</span>
                        <span class="record-name">
                            {move || highlight_matches(&name, &query.get())}
                        </span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>
                        {move || highlight_matches(&description, &query.get())}
                    </TableCellLayout>
                </TableCell>
                <TableCell>{or_dash(&set.groups)}</TableCell>
                <TableCell>
                    <StatusBadge tone=tone status=set.status />
                </TableCell>
                <TableCell>{set.updated}</TableCell>
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
