use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::record_list::RecordListPage;
use contracts::domain::a004_question::Question;
use leptos::prelude::*;
use thaw::*;

const PAGE_ID: &str = "a004_question--list";
const COLUMNS: [&str; 7] = [
    "Name",
    "Description",
    "Groups",
    "Chart Type",
    "Status",
    "Updated",
    "Actions",
];

#[component]
#[allow(non_snake_case)]
pub fn QuestionList() -> impl IntoView {
    let data = use_catalog().with(|c| c.questions.clone());
    let schema = data.schema.clone();

    let row = move |question: Question, query: Signal<String>| {
        let tone = schema.status_tone(&question.status);
        let chart = question.chart_type;
        let name = question.name.clone();
        let description = or_dash(&question.description);
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="record-icon">{icon("help-circle")}</span>
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
                <TableCell>{or_dash(&question.groups)}</TableCell>
                <TableCell>
                    <span class="chart-type">
                        {icon(chart.icon())}
                        {chart.as_str()}
                    </span>
                </TableCell>
                <TableCell>
                    <StatusBadge tone=tone status=question.status />
                </TableCell>
                <TableCell>{question.updated}</TableCell>
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
