use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

/// Dashboard composed of widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: String,
    #[serde(default)]
    pub widgets: u32,
    pub status: String,
    pub updated: String,
}

impl ListRecord for Dashboard {
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
            "widgets" => Some(AttributeValue::Number(u64::from(self.widgets))),
            "groups" => Some(AttributeValue::Text(&self.groups)),
            "updated" => Some(AttributeValue::Text(&self.updated)),
            _ => None,
        }
    }
}

const SEED_JSON: &str = include_str!("seed.json");

pub fn seed() -> Result<Vec<Dashboard>, CatalogError> {
    parse_seed(PageKey::Dashboards, SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads() {
        let dashboards = seed().unwrap();
        assert_eq!(dashboards.len(), 8);
        assert!(dashboards.iter().all(|d| d.widgets == 0));
    }

    #[test]
    fn test_widgets_attribute_is_numeric() {
        let dashboard = Dashboard {
            id: RecordId(1),
            name: "ops".to_string(),
            description: String::new(),
            groups: String::new(),
            widgets: 7,
            status: "Active".to_string(),
            updated: "Never".to_string(),
        };
        assert_eq!(dashboard.attribute("widgets"), Some(AttributeValue::Number(7)));
    }
}
