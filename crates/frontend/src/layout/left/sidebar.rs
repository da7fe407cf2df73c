//! Sidebar navigation: home plus one entry per catalog page.

use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::catalog::use_catalog;
use crate::shared::icons::icon;
use contracts::domain::common::PageKey;
use contracts::domain::Catalog;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    view: ActiveView,
    label: String,
    icon: String,
    badge: Option<u64>,
}

fn menu_items(catalog: &Catalog) -> Vec<MenuItem> {
    let badges = catalog.nav_badges();
    let home = MenuItem {
        view: ActiveView::Home,
        label: "Home".to_string(),
        icon: "home".to_string(),
        badge: None,
    };

    std::iter::once(home)
        .chain(PageKey::ALL.into_iter().map(|key| {
            let schema = catalog.schema(key);
            MenuItem {
                view: ActiveView::Page(key),
                label: schema.nav_label.clone(),
                icon: schema.icon.clone(),
                badge: badges.get(&key).copied(),
            }
        }))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let catalog = use_catalog();
    let app = catalog.app();
    let items = catalog.with(menu_items);

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("bar-chart")}</div>
                <span class="app-sidebar__brand-title">{app.title}</span>
            </div>

            // Display only; page lists have their own search
            <div class="app-sidebar__search">
                {icon("search")}
                <input type="text" placeholder="Search..." />
            </div>

            <nav class="app-sidebar__menu">
                {items.into_iter().map(|item| {
                    let target = item.view;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(target)
                            on:click=move |_| ctx.navigate(target)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(&item.icon)}
                                <span>{item.label}</span>
                            </div>
                            {item.badge.map(|count| view! {
                                <span class="app-sidebar__badge">{count}</span>
                            })}
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_home_then_pages() {
        let catalog = Catalog::load().unwrap();
        let items = menu_items(&catalog);
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].view, ActiveView::Home);
        assert_eq!(items[1].label, "Data Sources");
        assert_eq!(items[6].view, ActiveView::Page(PageKey::Subscriptions));
    }

    #[test]
    fn test_badges_come_from_summary_counts() {
        let catalog = Catalog::load().unwrap();
        let badges: Vec<(String, Option<u64>)> = menu_items(&catalog)
            .into_iter()
            .map(|item| (item.label, item.badge))
            .collect();
        assert_eq!(badges[1], ("Data Sources".to_string(), Some(4)));
        assert_eq!(badges[2].1, None);
        assert_eq!(badges[3], ("Reports".to_string(), Some(21)));
        assert_eq!(badges[5], ("Dashboards".to_string(), Some(8)));
    }
}
