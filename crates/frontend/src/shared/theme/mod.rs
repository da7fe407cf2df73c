//! Theme management.
//!
//! Light and dark themes; the choice is persisted in localStorage and
//! applied as `data-theme` on `<body>`.

mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light mode",
            Theme::Dark => "Dark mode",
        }
    }

    /// Parse theme from string. Unknown names fall back to light.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::debug!("Theme preference could not be stored");
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme: {}", theme.as_str());
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }
}

/// Provides theme context to children components.
///
/// A stored preference wins over `default_theme`.
#[component]
pub fn ThemeProvider(default_theme: Theme, children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage().unwrap_or(default_theme);
    let theme = RwSignal::new(initial_theme);
    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("forest"), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
