use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::record_list::RecordListPage;
use contracts::domain::a003_report::Report;
use leptos::prelude::*;
use thaw::*;

const PAGE_ID: &str = "a003_report--list";
const COLUMNS: [&str; 6] = ["Name", "Description", "Groups", "Status", "Updated", "Actions"];

#[component]
#[allow(non_snake_case)]
pub fn ReportList() -> impl IntoView {
    let data = use_catalog().with(|c| c.reports.clone());
    let schema = data.schema.clone();

    let row = move |report: Report, query: Signal<String>| {
        let tone = schema.status_tone(&report.status);
        let name = report.name.clone();
        let description = or_dash(&report.description);
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="record-icon">{icon("file-text")}</span>
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
                <TableCell>{or_dash(&report.groups)}</TableCell>
                <TableCell>
                    <StatusBadge tone=tone status=report.status />
                </TableCell>
                <TableCell>{report.updated}</TableCell>
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
