use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::record_list::RecordListPage;
use contracts::domain::a005_dashboard::Dashboard;
use leptos::prelude::*;
use thaw::*;

const PAGE_ID: &str = "a005_dashboard--list";
const COLUMNS: [&str; 7] = [
    "Name",
    "Description",
    "Groups",
    "Widgets",
    "Status",
    "Updated",
    "Actions",
];

#[component]
#[allow(non_snake_case)]
pub fn DashboardList() -> impl IntoView {
    let data = use_catalog().with(|c| c.dashboards.clone());
    let schema = data.schema.clone();

    let row = move |dashboard: Dashboard, query: Signal<String>| {
        let tone = schema.status_tone(&dashboard.status);
        let name = dashboard.name.clone();
        let description = or_dash(&dashboard.description);
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="record-icon">{icon("layout")}</span>
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
                <TableCell>{or_dash(&dashboard.groups)}</TableCell>
                <TableCell>
                    <span class="record-number">{dashboard.widgets}</span>
                </TableCell>
                <TableCell>
                    <StatusBadge tone=tone status=dashboard.status />
                </TableCell>
                <TableCell>{dashboard.updated}</TableCell>
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
