//! Declarative description of one list page.

use super::filter::ALL_TOKEN;
use crate::domain::common::PageKey;
use crate::shared::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Key under which the record count is reported.
pub const TOTAL_KEY: &str = "total";

/// Visual category of a status value or counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Error => "error",
            StatusTone::Info => "info",
            StatusTone::Neutral => "neutral",
        }
    }
}

/// How the status filter is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStyle {
    #[default]
    Tabs,
    Select,
}

/// One entry of the status filter vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Token compared against record statuses (`"All"` disables the filter).
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl FilterOption {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Predicate of a footer counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CounterRule {
    /// Records whose status equals the value, ignoring case.
    Status { equals: String },
    /// Records whose attribute equals the value, ignoring case.
    Attribute { field: String, equals: String },
    /// Sum of a numeric attribute.
    Sum { field: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub tone: StatusTone,
    pub rule: CounterRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSchema {
    pub key: PageKey,
    pub title: String,
    pub subtitle: String,
    /// Sidebar label.
    pub nav_label: String,
    pub icon: String,
    pub search_placeholder: String,
    /// Plural noun used in empty-state messages ("data sources").
    pub item_label: String,
    #[serde(default)]
    pub filter_style: FilterStyle,
    pub filters: Vec<FilterOption>,
    /// Status (lowercase) to tone.
    #[serde(default)]
    pub status_tones: BTreeMap<String, StatusTone>,
    #[serde(default)]
    pub default_tone: StatusTone,
    pub total_label: String,
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
    /// Counter shown as the sidebar badge.
    #[serde(default)]
    pub badge: Option<String>,
}

impl PageSchema {
    /// Tone for a record status, falling back to `default_tone`.
    pub fn status_tone(&self, status: &str) -> StatusTone {
        let status = status.to_lowercase();
        self.status_tones
            .iter()
            .find(|(key, _)| key.to_lowercase() == status)
            .map(|(_, tone)| *tone)
            .unwrap_or(self.default_tone)
    }

    pub fn counter(&self, key: &str) -> Option<&CounterSpec> {
        self.counters.iter().find(|c| c.key == key)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let page = self.key;

        match self.filters.first() {
            None => {
                return Err(CatalogError::InvalidFilters {
                    page,
                    reason: "filter vocabulary is empty".to_string(),
                })
            }
            Some(first) if first.value != ALL_TOKEN => {
                return Err(CatalogError::InvalidFilters {
                    page,
                    reason: format!("first filter must be '{}', got '{}'", ALL_TOKEN, first.value),
                })
            }
            Some(_) => {}
        }

        let mut seen_filters = HashSet::new();
        for option in &self.filters {
            if !seen_filters.insert(option.value.as_str()) {
                return Err(CatalogError::InvalidFilters {
                    page,
                    reason: format!("filter '{}' is listed more than once", option.value),
                });
            }
        }

        let mut seen_counters = HashSet::new();
        for counter in &self.counters {
            if counter.key == TOTAL_KEY {
                return Err(CatalogError::ReservedCounter { page });
            }
            if !seen_counters.insert(counter.key.as_str()) {
                return Err(CatalogError::DuplicateCounter {
                    page,
                    key: counter.key.clone(),
                });
            }
        }

        if let Some(badge) = &self.badge {
            if badge != TOTAL_KEY && self.counter(badge).is_none() {
                return Err(CatalogError::UnknownBadge {
                    page,
                    key: badge.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn dashboards_schema() -> PageSchema {
        PageSchema {
            key: PageKey::Dashboards,
            title: "Dashboards".to_string(),
            subtitle: "Create and manage your dashboards".to_string(),
            nav_label: "Dashboards".to_string(),
            icon: "bar-chart".to_string(),
            search_placeholder: "Search dashboards...".to_string(),
            item_label: "dashboards".to_string(),
            filter_style: FilterStyle::Tabs,
            filters: ["All", "Active", "Draft", "Archived"]
                .iter()
                .map(|v| FilterOption {
                    value: v.to_string(),
                    label: None,
                })
                .collect(),
            status_tones: BTreeMap::from([
                ("active".to_string(), StatusTone::Success),
                ("draft".to_string(), StatusTone::Warning),
                ("syncing".to_string(), StatusTone::Info),
            ]),
            default_tone: StatusTone::Neutral,
            total_label: "Total Dashboards".to_string(),
            counters: vec![
                CounterSpec {
                    key: "draft".to_string(),
                    label: "Draft".to_string(),
                    tone: StatusTone::Warning,
                    rule: CounterRule::Status {
                        equals: "Draft".to_string(),
                    },
                },
                CounterSpec {
                    key: "syncing".to_string(),
                    label: "Syncing".to_string(),
                    tone: StatusTone::Info,
                    rule: CounterRule::Status {
                        equals: "Syncing".to_string(),
                    },
                },
                CounterSpec {
                    key: "bar".to_string(),
                    label: "Bar Charts".to_string(),
                    tone: StatusTone::Info,
                    rule: CounterRule::Attribute {
                        field: "chart_type".to_string(),
                        equals: "bar".to_string(),
                    },
                },
                CounterSpec {
                    key: "widgets".to_string(),
                    label: "Total Widgets".to_string(),
                    tone: StatusTone::Neutral,
                    rule: CounterRule::Sum {
                        field: "widgets".to_string(),
                    },
                },
            ],
            badge: Some(TOTAL_KEY.to_string()),
        }
    }

    #[test]
    fn test_status_tone_lookup_ignores_case() {
        let schema = dashboards_schema();
        assert_eq!(schema.status_tone("Draft"), StatusTone::Warning);
        assert_eq!(schema.status_tone("ACTIVE"), StatusTone::Success);
        assert_eq!(schema.status_tone("Syncing"), StatusTone::Info);
        assert_eq!(schema.status_tone("Archived"), StatusTone::Neutral);
    }

    #[test]
    fn test_default_tone_applies_to_unknown_status() {
        let mut schema = dashboards_schema();
        schema.default_tone = StatusTone::Info;
        assert_eq!(schema.status_tone("queued"), StatusTone::Info);
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(dashboards_schema().validate().is_ok());
    }

    #[test]
    fn test_filters_must_start_with_all() {
        let mut schema = dashboards_schema();
        schema.filters.remove(0);
        assert!(matches!(
            schema.validate(),
            Err(CatalogError::InvalidFilters { page: PageKey::Dashboards, .. })
        ));

        schema.filters.clear();
        assert!(matches!(schema.validate(), Err(CatalogError::InvalidFilters { .. })));
    }

    #[test]
    fn test_lowercase_all_is_not_the_sentinel() {
        let mut schema = dashboards_schema();
        schema.filters[0].value = "all".to_string();
        assert!(matches!(schema.validate(), Err(CatalogError::InvalidFilters { .. })));
    }

    #[test]
    fn test_duplicate_filter_rejected() {
        let mut schema = dashboards_schema();
        schema.filters.push(FilterOption {
            value: "Draft".to_string(),
            label: Some("Drafts".to_string()),
        });
        assert!(matches!(schema.validate(), Err(CatalogError::InvalidFilters { .. })));
    }

    #[test]
    fn test_counter_keys_unique_and_not_total() {
        let mut schema = dashboards_schema();
        let dup = schema.counters[0].clone();
        schema.counters.push(dup);
        assert!(matches!(
            schema.validate(),
            Err(CatalogError::DuplicateCounter { key, .. }) if key == "draft"
        ));

        let mut schema = dashboards_schema();
        schema.counters[1].key = TOTAL_KEY.to_string();
        assert!(matches!(schema.validate(), Err(CatalogError::ReservedCounter { .. })));
    }

    #[test]
    fn test_badge_must_name_a_counter() {
        let mut schema = dashboards_schema();
        schema.badge = Some("draft".to_string());
        assert!(schema.validate().is_ok());

        schema.badge = Some("published".to_string());
        assert!(matches!(
            schema.validate(),
            Err(CatalogError::UnknownBadge { key, .. }) if key == "published"
        ));
    }

    #[test]
    fn test_filter_option_label_falls_back_to_value() {
        let plain = FilterOption {
            value: "Draft".to_string(),
            label: None,
        };
        let labelled = FilterOption {
            value: "PAUSED".to_string(),
            label: Some("Paused".to_string()),
        };
        assert_eq!(plain.label(), "Draft");
        assert_eq!(labelled.label(), "Paused");
    }
}
