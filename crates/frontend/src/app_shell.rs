//! Application shell: sidebar plus the active page in the content area.

use crate::dashboards::d100_home::ui::HomePage;
use crate::domain::a001_data_source::ui::list::DataSourceList;
use crate::domain::a002_data_set::ui::list::DataSetList;
use crate::domain::a003_report::ui::list::ReportList;
use crate::domain::a004_question::ui::list::QuestionList;
use crate::domain::a005_dashboard::ui::list::DashboardList;
use crate::domain::a006_subscription::ui::list::SubscriptionList;
use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use contracts::domain::common::PageKey;
use leptos::prelude::*;

/// Component for the active view. Each switch mounts a fresh page, so
/// search and status selection start over.
fn render_view(view: ActiveView) -> AnyView {
    match view {
        ActiveView::Home => view! { <HomePage /> }.into_any(),
        ActiveView::Page(PageKey::DataSources) => view! { <DataSourceList /> }.into_any(),
        ActiveView::Page(PageKey::DataSets) => view! { <DataSetList /> }.into_any(),
        ActiveView::Page(PageKey::Reports) => view! { <ReportList /> }.into_any(),
        ActiveView::Page(PageKey::Questions) => view! { <QuestionList /> }.into_any(),
        ActiveView::Page(PageKey::Dashboards) => view! { <DashboardList /> }.into_any(),
        ActiveView::Page(PageKey::Subscriptions) => view! { <SubscriptionList /> }.into_any(),
    }
}

/// Initializes router integration (`?active=...`) once and renders the shell.
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! { {move || render_view(ctx.active.get())} }.into_any()
            }
        />
    }
}
