//! Application and page configuration.
//!
//! The configuration is embedded in the binary and parsed once at startup.
//! Page schemas are declarative: filter vocabulary, status tones and footer
//! counters are data, not code.

use crate::domain::common::PageKey;
use crate::shared::error::CatalogError;
use crate::shared::list_view::PageSchema;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub app: AppConfig,
    pub pages: Vec<PageSchema>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub tagline: String,
    /// "light" or "dark"; the stored user preference wins over this.
    #[serde(default = "default_theme")]
    pub default_theme: String,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
    pub user_name: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_sidebar_open() -> bool {
    true
}

impl AppConfig {
    /// Initials for the avatar ("John Doe" -> "JD").
    pub fn user_initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn user_first_name(&self) -> &str {
        self.user_name.split_whitespace().next().unwrap_or("")
    }
}

impl CatalogConfig {
    pub fn page(&self, key: PageKey) -> Result<&PageSchema, CatalogError> {
        self.pages
            .iter()
            .find(|p| p.key == key)
            .ok_or(CatalogError::UnknownPage(key))
    }

    /// Every page configured exactly once and every schema valid.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.key) {
                return Err(CatalogError::DuplicatePage(page.key));
            }
            page.validate()?;
        }
        for key in PageKey::ALL {
            self.page(key)?;
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "PCSoft Analytics"
tagline = "Manage your analytics platform"
default_theme = "light"
sidebar_open = true
user_name = "John Doe"

[[pages]]
key = "data-sources"
title = "Data Sources"
subtitle = "Connect and manage your data sources"
nav_label = "Data Sources"
icon = "database"
search_placeholder = "Search data sources..."
item_label = "data sources"
filters = [
    { value = "All" },
    { value = "Connected" },
    { value = "Disconnected" },
    { value = "Error" },
]
status_tones = { connected = "success", disconnected = "error", error = "warning" }
total_label = "Total Sources"
badge = "total"
counters = [
    { key = "connected", label = "Connected", tone = "success", rule = { kind = "status", equals = "connected" } },
    { key = "disconnected", label = "Disconnected", tone = "error", rule = { kind = "status", equals = "disconnected" } },
    { key = "error", label = "Errors", tone = "warning", rule = { kind = "status", equals = "error" } },
]

[[pages]]
key = "data-sets"
title = "Data Sets"
subtitle = "Create and manage your data sets"
nav_label = "Data Sets"
icon = "layers"
search_placeholder = "Search datasets..."
item_label = "data sets"
filters = [
    { value = "All" },
    { value = "Active" },
    { value = "Draft" },
    { value = "Archived" },
]
status_tones = { active = "success", draft = "warning", syncing = "info", archived = "neutral" }
total_label = "Total Data Sets"
counters = [
    { key = "active", label = "Active", tone = "success", rule = { kind = "status", equals = "Active" } },
    { key = "draft", label = "Draft", tone = "warning", rule = { kind = "status", equals = "Draft" } },
    { key = "syncing", label = "Syncing", tone = "info", rule = { kind = "status", equals = "Syncing" } },
]

[[pages]]
key = "reports"
title = "Reports"
subtitle = "Create and manage your reports"
nav_label = "Reports"
icon = "file-text"
search_placeholder = "Search reports..."
item_label = "reports"
filters = [
    { value = "All" },
    { value = "Active" },
    { value = "Draft" },
    { value = "Archived" },
]
status_tones = { active = "success", draft = "warning", archived = "neutral" }
total_label = "Total Reports"
badge = "total"
counters = [
    { key = "active", label = "Active", tone = "success", rule = { kind = "status", equals = "Active" } },
    { key = "draft", label = "Draft", tone = "warning", rule = { kind = "status", equals = "Draft" } },
    { key = "archived", label = "Archived", tone = "neutral", rule = { kind = "status", equals = "Archived" } },
]

[[pages]]
key = "questions"
title = "Questions"
subtitle = "Create and manage your analytical questions"
nav_label = "Questions"
icon = "help-circle"
search_placeholder = "Search questions..."
item_label = "questions"
filters = [
    { value = "All" },
    { value = "Draft" },
    { value = "Published" },
    { value = "Archived" },
]
status_tones = { published = "success", draft = "warning", archived = "neutral" }
total_label = "Total Questions"
counters = [
    { key = "bar", label = "Bar Charts", tone = "info", rule = { kind = "attribute", field = "chart_type", equals = "Bar" } },
    { key = "pie", label = "Pie Charts", tone = "neutral", rule = { kind = "attribute", field = "chart_type", equals = "Pie" } },
    { key = "line", label = "Line Charts", tone = "success", rule = { kind = "attribute", field = "chart_type", equals = "Line" } },
    { key = "area", label = "Area Charts", tone = "warning", rule = { kind = "attribute", field = "chart_type", equals = "Area" } },
]

[[pages]]
key = "dashboards"
title = "Dashboards"
subtitle = "Create and manage your dashboards"
nav_label = "Dashboards"
icon = "bar-chart"
search_placeholder = "Search dashboards..."
item_label = "dashboards"
filters = [
    { value = "All" },
    { value = "Active" },
    { value = "Draft" },
    { value = "Archived" },
]
status_tones = { active = "success", draft = "warning", archived = "neutral" }
total_label = "Total Dashboards"
badge = "total"
counters = [
    { key = "active", label = "Active", tone = "success", rule = { kind = "status", equals = "Active" } },
    { key = "draft", label = "Draft", tone = "warning", rule = { kind = "status", equals = "Draft" } },
    { key = "widgets", label = "Total Widgets", tone = "info", rule = { kind = "sum", field = "widgets" } },
]

[[pages]]
key = "subscriptions"
title = "Email Subscriptions"
subtitle = "Manage your email subscriptions for reports and dashboards"
nav_label = "Subscriptions"
icon = "send"
search_placeholder = "Search subscriptions..."
item_label = "subscriptions"
filter_style = "select"
filters = [
    { value = "All" },
    { value = "ACTIVE", label = "Active" },
    { value = "PAUSED", label = "Paused" },
    { value = "INACTIVE", label = "Inactive" },
]
status_tones = { active = "success", paused = "warning", inactive = "neutral" }
default_tone = "info"
total_label = "Total Subscriptions"
counters = [
    { key = "active", label = "Active", tone = "success", rule = { kind = "status", equals = "ACTIVE" } },
    { key = "paused", label = "Paused", tone = "warning", rule = { kind = "status", equals = "PAUSED" } },
    { key = "recipients", label = "Total Recipients", tone = "info", rule = { kind = "sum", field = "recipients" } },
]
"#;

/// Parse a configuration document and validate every page schema.
pub fn parse_config(text: &str) -> Result<CatalogConfig, CatalogError> {
    let config: CatalogConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load the embedded default configuration.
pub fn load_config() -> Result<CatalogConfig, CatalogError> {
    log::debug!("Loading embedded catalog configuration");
    parse_config(DEFAULT_CONFIG)
}
