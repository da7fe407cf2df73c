//! Catalog of every list page: schema plus seed collection.

use super::a001_data_source::{self, DataSource};
use super::a002_data_set::{self, DataSet};
use super::a003_report::{self, Report};
use super::a004_question::{self, Question};
use super::a005_dashboard::{self, Dashboard};
use super::a006_subscription::{self, Subscription};
use super::common::PageKey;
use crate::shared::config::{load_config, AppConfig, CatalogConfig};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{
    summary_counts, visible_records, FilterState, ListRecord, PageSchema, StatusTone,
    SummaryCounts,
};
use std::collections::{BTreeMap, HashSet};

/// Schema and records of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<R> {
    pub schema: PageSchema,
    pub records: Vec<R>,
}

impl<R: ListRecord> PageData<R> {
    /// Bind records to a schema, rejecting duplicate ids and empty names.
    pub fn new(schema: PageSchema, records: Vec<R>) -> Result<Self, CatalogError> {
        schema.validate()?;
        let page = schema.key;
        let mut ids = HashSet::new();
        for record in &records {
            let id = record.id();
            if !ids.insert(id) {
                return Err(CatalogError::DuplicateId { page, id });
            }
            if record.name().trim().is_empty() {
                return Err(CatalogError::EmptyName { page, id });
            }
        }
        Ok(Self { schema, records })
    }

    pub fn key(&self) -> PageKey {
        self.schema.key
    }

    pub fn summary(&self) -> SummaryCounts {
        summary_counts(&self.records, &self.schema)
    }

    pub fn visible(&self, filter: &FilterState) -> Vec<&R> {
        visible_records(&self.records, filter)
    }

    pub fn status_tone(&self, status: &str) -> StatusTone {
        self.schema.status_tone(status)
    }

    /// Sidebar badge value, read from the same summary the footer shows.
    pub fn badge(&self) -> Option<u64> {
        let key = self.schema.badge.as_deref()?;
        self.summary().get(key)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub app: AppConfig,
    pub data_sources: PageData<DataSource>,
    pub data_sets: PageData<DataSet>,
    pub reports: PageData<Report>,
    pub questions: PageData<Question>,
    pub dashboards: PageData<Dashboard>,
    pub subscriptions: PageData<Subscription>,
}

impl Catalog {
    /// Build the catalog from the embedded configuration and seed data.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_config(load_config()?)?;
        log::debug!(
            "Catalog loaded: {}",
            PageKey::ALL
                .iter()
                .map(|key| format!("{}={}", key, catalog.summary(*key).total()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(catalog)
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let schema = |key: PageKey| config.page(key).cloned();

        Ok(Self {
            data_sources: PageData::new(schema(PageKey::DataSources)?, a001_data_source::seed()?)?,
            data_sets: PageData::new(schema(PageKey::DataSets)?, a002_data_set::seed()?)?,
            reports: PageData::new(schema(PageKey::Reports)?, a003_report::seed()?)?,
            questions: PageData::new(schema(PageKey::Questions)?, a004_question::seed()?)?,
            dashboards: PageData::new(schema(PageKey::Dashboards)?, a005_dashboard::seed()?)?,
            subscriptions: PageData::new(
                schema(PageKey::Subscriptions)?,
                a006_subscription::seed()?,
            )?,
            app: config.app,
        })
    }

    pub fn schema(&self, key: PageKey) -> &PageSchema {
        match key {
            PageKey::DataSources => &self.data_sources.schema,
            PageKey::DataSets => &self.data_sets.schema,
            PageKey::Reports => &self.reports.schema,
            PageKey::Questions => &self.questions.schema,
            PageKey::Dashboards => &self.dashboards.schema,
            PageKey::Subscriptions => &self.subscriptions.schema,
        }
    }

    pub fn summary(&self, key: PageKey) -> SummaryCounts {
        match key {
            PageKey::DataSources => self.data_sources.summary(),
            PageKey::DataSets => self.data_sets.summary(),
            PageKey::Reports => self.reports.summary(),
            PageKey::Questions => self.questions.summary(),
            PageKey::Dashboards => self.dashboards.summary(),
            PageKey::Subscriptions => self.subscriptions.summary(),
        }
    }

    pub fn badge(&self, key: PageKey) -> Option<u64> {
        match key {
            PageKey::DataSources => self.data_sources.badge(),
            PageKey::DataSets => self.data_sets.badge(),
            PageKey::Reports => self.reports.badge(),
            PageKey::Questions => self.questions.badge(),
            PageKey::Dashboards => self.dashboards.badge(),
            PageKey::Subscriptions => self.subscriptions.badge(),
        }
    }

    /// Badge values of every page that declares one.
    pub fn nav_badges(&self) -> BTreeMap<PageKey, u64> {
        PageKey::ALL
            .into_iter()
            .filter_map(|key| self.badge(key).map(|value| (key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordId;
    use crate::shared::list_view::EmptyState;
    use crate::shared::list_view::empty_state;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_catalog_loads_every_page() {
        let catalog = catalog();
        assert_eq!(catalog.app.title, "PCSoft Analytics");
        for key in PageKey::ALL {
            assert_eq!(catalog.schema(key).key, key);
        }
    }

    #[test]
    fn test_data_source_footer() {
        let counts = catalog().summary(PageKey::DataSources);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("connected"), Some(0));
        assert_eq!(counts.get("disconnected"), Some(4));
        assert_eq!(counts.get("error"), Some(0));
    }

    #[test]
    fn test_data_set_footer() {
        let counts = catalog().summary(PageKey::DataSets);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.get("active"), Some(0));
        assert_eq!(counts.get("draft"), Some(9));
        assert_eq!(counts.get("syncing"), Some(1));
    }

    #[test]
    fn test_report_footer() {
        let counts = catalog().summary(PageKey::Reports);
        assert_eq!(counts.total(), 21);
        assert_eq!(counts.get("draft"), Some(21));
        assert_eq!(counts.get("archived"), Some(0));
    }

    #[test]
    fn test_question_footer_counts_chart_types() {
        let counts = catalog().summary(PageKey::Questions);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.get("bar"), Some(5));
        assert_eq!(counts.get("pie"), Some(2));
        assert_eq!(counts.get("line"), Some(2));
        assert_eq!(counts.get("area"), Some(1));
    }

    #[test]
    fn test_dashboard_footer() {
        let counts = catalog().summary(PageKey::Dashboards);
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.get("draft"), Some(8));
        assert_eq!(counts.get("widgets"), Some(0));
    }

    #[test]
    fn test_subscription_footer() {
        let counts = catalog().summary(PageKey::Subscriptions);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get("active"), Some(1));
        assert_eq!(counts.get("paused"), Some(0));
        assert_eq!(counts.get("recipients"), Some(1));
    }

    #[test]
    fn test_nav_badges_match_footer_totals() {
        let catalog = catalog();
        let badges = catalog.nav_badges();
        assert_eq!(
            badges.keys().copied().collect::<Vec<_>>(),
            vec![PageKey::DataSources, PageKey::Reports, PageKey::Dashboards]
        );
        for (key, value) in &badges {
            assert_eq!(Some(*value), catalog.summary(*key).get("total"));
        }
        assert_eq!(badges[&PageKey::Reports], 21);
        assert_eq!(catalog.badge(PageKey::Questions), None);
    }

    #[test]
    fn test_badge_can_name_a_counter() {
        let mut catalog = catalog();
        catalog.data_sets.schema.badge = Some("syncing".to_string());
        assert_eq!(catalog.nav_badges().get(&PageKey::DataSets), Some(&1));
    }

    #[test]
    fn test_scenario_search_by_name() {
        let catalog = catalog();
        let filter = FilterState::new().with_query("19");
        let names: Vec<&str> = catalog
            .data_sources
            .visible(&filter)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["sql19", "VISION - SQL19"]);
    }

    #[test]
    fn test_scenario_status_with_no_matches() {
        let catalog = catalog();
        let filter = FilterState::new().with_status("Active");
        let visible = catalog.dashboards.visible(&filter);
        assert!(visible.is_empty());
        assert_eq!(
            empty_state(catalog.dashboards.records.len(), visible.len()),
            EmptyState::NoMatches
        );
        assert_eq!(catalog.dashboards.summary().get("draft"), Some(8));
    }

    #[test]
    fn test_unlisted_status_still_visible_under_all() {
        let catalog = catalog();
        let visible = catalog.data_sets.visible(&FilterState::new());
        assert_eq!(visible.len(), 10);
        assert_eq!(catalog.data_sets.status_tone("Syncing"), StatusTone::Info);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = catalog();
        let mut records = catalog.reports.records.clone();
        records[1].id = records[0].id;
        let result = PageData::new(catalog.reports.schema.clone(), records);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { page: PageKey::Reports, id }) if id == RecordId(1)
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let catalog = catalog();
        let mut records = catalog.questions.records.clone();
        records[2].name = "  ".to_string();
        let result = PageData::new(catalog.questions.schema.clone(), records);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyName { page: PageKey::Questions, id }) if id == RecordId(3)
        ));
    }

    #[test]
    fn test_empty_collection_is_allowed() {
        let catalog = catalog();
        let page = PageData::<Report>::new(catalog.reports.schema.clone(), Vec::new()).unwrap();
        assert_eq!(page.summary().total(), 0);
        assert_eq!(page.badge(), Some(0));
        assert_eq!(empty_state(page.records.len(), 0), EmptyState::NoRecords);
    }
}
