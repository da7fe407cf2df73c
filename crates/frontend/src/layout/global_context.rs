use contracts::domain::common::PageKey;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use web_sys::window;

/// What the center area shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Page(PageKey),
}

impl ActiveView {
    pub const HOME_KEY: &'static str = "home";

    pub fn key(&self) -> &'static str {
        match self {
            ActiveView::Home => Self::HOME_KEY,
            ActiveView::Page(page) => page.as_str(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key == Self::HOME_KEY {
            return Some(ActiveView::Home);
        }
        PageKey::from_key(key).map(ActiveView::Page)
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Query string mirrored into the address bar (`?active=reports`).
#[derive(Debug, Default, Serialize, Deserialize)]
struct UrlState {
    #[serde(default)]
    active: Option<String>,
}

fn parse_url_state(search: &str) -> Option<ActiveView> {
    let state: UrlState = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    state.active.as_deref().and_then(ActiveView::from_key)
}

fn url_for(view: ActiveView) -> String {
    let state = UrlState {
        active: Some(view.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&state).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ActiveView>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(left_open: bool) -> Self {
        Self {
            active: RwSignal::new(ActiveView::Home),
            left_open: RwSignal::new(left_open),
        }
    }

    /// Restore the active view from `?active=` and keep the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match parse_url_state(&search) {
            Some(view) => self.navigate(view),
            None if !search.is_empty() => {
                log::debug!("Ignoring unknown location query '{}'", search)
            }
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = url_for(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, view: ActiveView) {
        log::debug!("navigate: '{}'", view);
        self.active.set(view);
    }

    pub fn is_active(&self, view: ActiveView) -> bool {
        self.active.get() == view
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_view_keys() {
        assert_eq!(ActiveView::from_key("home"), Some(ActiveView::Home));
        assert_eq!(
            ActiveView::from_key("data-sets"),
            Some(ActiveView::Page(PageKey::DataSets))
        );
        assert_eq!(ActiveView::from_key("settings"), None);
        assert_eq!(ActiveView::Page(PageKey::Questions).key(), "questions");
    }

    #[test]
    fn test_url_state_round_trip() {
        let url = url_for(ActiveView::Page(PageKey::Subscriptions));
        assert_eq!(url, "?active=subscriptions");
        assert_eq!(
            parse_url_state(&url),
            Some(ActiveView::Page(PageKey::Subscriptions))
        );
    }

    #[test]
    fn test_url_state_ignores_unknown_input() {
        assert_eq!(parse_url_state(""), None);
        assert_eq!(parse_url_state("?active=nope"), None);
        assert_eq!(parse_url_state("?other=1"), None);
    }
}
