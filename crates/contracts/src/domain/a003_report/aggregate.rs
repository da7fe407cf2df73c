use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: String,
    pub status: String,
    pub updated: String,
}

impl ListRecord for Report {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn attribute(&self, field: &str) -> Option<AttributeValue<'_>> {
        match field {
            "groups" => Some(AttributeValue::Text(&self.groups)),
            "updated" => Some(AttributeValue::Text(&self.updated)),
            _ => None,
        }
    }
}

const SEED_JSON: &str = include_str!("seed.json");

pub fn seed() -> Result<Vec<Report>, CatalogError> {
    parse_seed(PageKey::Reports, SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{visible_records, FilterState};

    #[test]
    fn test_seed_loads() {
        let reports = seed().unwrap();
        assert_eq!(reports.len(), 21);
        assert!(reports.iter().all(|r| r.status == "Draft"));
    }

    #[test]
    fn test_search_reaches_description() {
        let reports = seed().unwrap();
        let filter = FilterState::new().with_query("MODERN DESIGNER");
        let visible = visible_records(&reports, &filter);
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|r| r.description.to_lowercase().contains("modern designer")));
    }
}
