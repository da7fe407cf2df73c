//! Email subscriptions: card layout with a delivery-kind tab strip.

use crate::shared::catalog::use_catalog;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::record_list::{Placeholder, RecordListPage};
use contracts::domain::a006_subscription::Subscription;
use leptos::prelude::*;
use std::sync::Arc;

const PAGE_ID: &str = "a006_subscription--list";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubscriptionTab {
    #[default]
    Mine,
    Reports,
    Dashboards,
}

impl SubscriptionTab {
    pub const ALL: [SubscriptionTab; 3] = [
        SubscriptionTab::Mine,
        SubscriptionTab::Reports,
        SubscriptionTab::Dashboards,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionTab::Mine => "My Subscriptions",
            SubscriptionTab::Reports => "Reports",
            SubscriptionTab::Dashboards => "Dashboards",
        }
    }

    /// Only "My Subscriptions" lists records; the other tabs show a prompt.
    pub fn placeholder(&self) -> Placeholder {
        match self {
            SubscriptionTab::Mine => None,
            SubscriptionTab::Reports => Some((
                "No report subscriptions".to_string(),
                "Subscribe to reports to receive them via email".to_string(),
            )),
            SubscriptionTab::Dashboards => Some((
                "No dashboard subscriptions".to_string(),
                "Subscribe to dashboards to receive them via email".to_string(),
            )),
        }
    }
}

fn detail(icon_name: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="subscription-card__detail">
            <span class="subscription-card__detail-icon">{icon(icon_name)}</span>
            <div>
                <div class="subscription-card__detail-label">{label}</div>
                <div class="subscription-card__detail-value">{value}</div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SubscriptionList() -> impl IntoView {
    let data = use_catalog().with(|c| c.subscriptions.clone());
    let schema = data.schema.clone();
    let tab = RwSignal::new(SubscriptionTab::default());
    let placeholder = Signal::derive(move || tab.get().placeholder());

    let tab_strip: ChildrenFn = Arc::new(move || {
        let items = SubscriptionTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button
                        class="tab-strip__item"
                        class:tab-strip__item--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }
            })
            .collect_view();
        view! { <div class="tab-strip">{items}</div> }.into_any()
    });

    let row = move |sub: Subscription, query: Signal<String>| {
        let tone = schema.status_tone(&sub.status);
        let name = sub.name.clone();
        let target = sub.report_name.clone();
        view! {
            <div class="subscription-card">
                <div class="subscription-card__header">
                    <div class="subscription-card__title">
                        <span class="record-icon">{icon("mail")}</span>
                        <h3>{move || highlight_matches(&name, &query.get())}</h3>
                        <StatusBadge tone=tone status=sub.status.clone() />
                    </div>
                    <span class="record-actions">{icon("more-vertical")}</span>
                </div>
                <p class="subscription-card__target">
                    {format!("{}: ", sub.kind.as_str())}
                    {move || highlight_matches(&target, &query.get())}
                </p>
                <div class="subscription-card__details">
                    {detail("clock", "Schedule", sub.schedule.clone())}
                    {detail("download", "Format", sub.format.clone())}
                    {detail("users", "Recipients", sub.recipients.to_string())}
                    {detail("calendar", "Next Send", sub.next_send.clone())}
                    {detail("mail", "Last Sent", sub.last_sent.clone())}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <RecordListPage
            page_id=PAGE_ID
            data=data
            row=row
            banner=tab_strip
            placeholder=placeholder
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mine_lists_records() {
        assert_eq!(SubscriptionTab::default(), SubscriptionTab::Mine);
        assert_eq!(SubscriptionTab::Mine.placeholder(), None);
        let (title, _) = SubscriptionTab::Reports.placeholder().unwrap();
        assert_eq!(title, "No report subscriptions");
        let (title, hint) = SubscriptionTab::Dashboards.placeholder().unwrap();
        assert_eq!(title, "No dashboard subscriptions");
        assert_eq!(hint, "Subscribe to dashboards to receive them via email");
    }
}
