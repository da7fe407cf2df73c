use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

/// Named query over one or more data sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: String,
    pub status: String,
    /// Relative or absolute date, display only.
    pub updated: String,
}

impl ListRecord for DataSet {
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

pub fn seed() -> Result<Vec<DataSet>, CatalogError> {
    parse_seed(PageKey::DataSets, SEED_JSON)
}
