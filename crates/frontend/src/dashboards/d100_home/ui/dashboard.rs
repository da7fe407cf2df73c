use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::catalog::use_catalog;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::common::PageKey;
use contracts::domain::Catalog;
use contracts::shared::list_view::StatusTone;
use leptos::prelude::*;

const PAGE_ID: &str = "d100_home--dashboard";

#[derive(Clone, Debug, PartialEq)]
struct HomeStat {
    label: &'static str,
    icon: &'static str,
    value: u64,
    tone: StatusTone,
    subtitle: String,
}

/// Overview figures, read from the same summaries the list footers show.
fn home_stats(catalog: &Catalog) -> Vec<HomeStat> {
    let sources = catalog.summary(PageKey::DataSources);
    let sets = catalog.summary(PageKey::DataSets);
    let reports = catalog.summary(PageKey::Reports);
    let subscriptions = catalog.summary(PageKey::Subscriptions);

    vec![
        HomeStat {
            label: "Total Data Sources",
            icon: "database",
            value: sources.total(),
            tone: StatusTone::Info,
            subtitle: format!("{} connected", sources.get("connected").unwrap_or(0)),
        },
        HomeStat {
            label: "Active Data Sets",
            icon: "layers",
            value: sets.get("active").unwrap_or(0),
            tone: StatusTone::Success,
            subtitle: format!("of {} data sets", sets.total()),
        },
        HomeStat {
            label: "Reports",
            icon: "file-text",
            value: reports.total(),
            tone: StatusTone::Neutral,
            subtitle: format!("{} active", reports.get("active").unwrap_or(0)),
        },
        HomeStat {
            label: "Email Recipients",
            icon: "users",
            value: subscriptions.get("recipients").unwrap_or(0),
            tone: StatusTone::Warning,
            subtitle: format!("across {} subscriptions", subscriptions.total()),
        },
    ]
}

struct QuickAction {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    target: Option<PageKey>,
}

static QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Data Sources",
        description: "Connect and manage your data sources",
        icon: "database",
        target: Some(PageKey::DataSources),
    },
    QuickAction {
        title: "Data Sets",
        description: "Create and manage your data sets",
        icon: "layers",
        target: Some(PageKey::DataSets),
    },
    // No guide page exists yet
    QuickAction {
        title: "Get Started",
        description: "Learn how to use PCSoft Analytics",
        icon: "sparkles",
        target: None,
    },
];

static RECENT_ACTIVITY: [(&str, &str, &str, &str); 4] = [
    ("New report generated", "Sarah Johnson", "5 minutes ago", "file-text"),
    ("Data source connected", "Mike Chen", "12 minutes ago", "database"),
    ("Dashboard updated", "Emma Wilson", "1 hour ago", "bar-chart"),
    ("New user joined", "Alex Rodriguez", "2 hours ago", "users"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let catalog = use_catalog();
    let app = catalog.app();
    let stats = catalog.with(home_stats);

    let stat_cards = stats
        .into_iter()
        .map(|s| {
            view! {
                <StatCard
                    label=s.label
                    icon_name=s.icon
                    value=s.value
                    tone=s.tone
                    subtitle=s.subtitle
                />
            }
        })
        .collect_view();

    let actions = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let target = action.target;
            view! {
                <div
                    class="quick-action"
                    class:quick-action--disabled=target.is_none()
                    on:click=move |_| {
                        if let Some(key) = target {
                            ctx.navigate(ActiveView::Page(key));
                        }
                    }
                >
                    <div class="quick-action__icon">{icon(action.icon)}</div>
                    <h4 class="quick-action__title">{action.title}</h4>
                    <p class="quick-action__description">{action.description}</p>
                    {target.map(|_| view! {
                        <span class="quick-action__link">"Explore" {icon("chevron-right")}</span>
                    })}
                </div>
            }
        })
        .collect_view();

    let activity = RECENT_ACTIVITY
        .iter()
        .map(|(action, user, time, icon_name)| {
            view! {
                <li class="activity__item">
                    <span class="activity__icon">{icon(icon_name)}</span>
                    <div class="activity__text">
                        <div class="activity__action">{*action}</div>
                        <div class="activity__user">{format!("by {}", user)}</div>
                    </div>
                    <span class="activity__time">{icon("clock")} {*time}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_DASHBOARD>
            <div class="welcome-banner">
                <div>
                    <h2 class="welcome-banner__title">{app.title.clone()}</h2>
                    <p class="welcome-banner__text">{app.tagline.clone()}</p>
                </div>
                <div class="welcome-banner__icon">{icon("activity")}</div>
            </div>

            <div class="page__content">
                <div class="stat-grid">{stat_cards}</div>

                <section class="home-section">
                    <h3 class="home-section__title">"Quick Actions"</h3>
                    <div class="quick-actions">{actions}</div>
                </section>

                <section class="home-section">
                    <h3 class="home-section__title">"Recent Activity"</h3>
                    <ul class="activity">{activity}</ul>
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_follow_catalog_summaries() {
        let catalog = Catalog::load().unwrap();
        let stats = home_stats(&catalog);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value, catalog.summary(PageKey::DataSources).total());
        assert_eq!(
            stats[1].value,
            catalog.summary(PageKey::DataSets).get("active").unwrap_or(0)
        );
        assert_eq!(stats[2].value, catalog.summary(PageKey::Reports).total());
        assert_eq!(stats[3].value, 1);
    }

    #[test]
    fn test_quick_actions_target_list_pages() {
        let targets: Vec<Option<PageKey>> = QUICK_ACTIONS.iter().map(|a| a.target).collect();
        assert_eq!(
            targets,
            vec![Some(PageKey::DataSources), Some(PageKey::DataSets), None]
        );
    }
}
