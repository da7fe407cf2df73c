use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Connection to an external database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: RecordId,
    pub name: String,

    /// Engine name ("SQL Server").
    #[serde(rename = "type")]
    pub source_type: String,

    /// Connection target; also searched.
    pub database: String,
    pub status: String,
    pub last_synced: String,

    #[serde(default)]
    pub description: String,
}

impl DataSource {
    pub fn is_connected(&self) -> bool {
        self.status.eq_ignore_ascii_case("connected")
    }
}

impl ListRecord for DataSource {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.database)
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn attribute(&self, field: &str) -> Option<AttributeValue<'_>> {
        match field {
            "type" => Some(AttributeValue::Text(&self.source_type)),
            "database" => Some(AttributeValue::Text(&self.database)),
            "last_synced" => Some(AttributeValue::Text(&self.last_synced)),
            _ => None,
        }
    }
}

// ============================================================================
// Seed
// ============================================================================

const SEED_JSON: &str = include_str!("seed.json");

pub fn seed() -> Result<Vec<DataSource>, CatalogError> {
    parse_seed(PageKey::DataSources, SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads() {
        let sources = seed().unwrap();
        assert_eq!(sources.len(), 4);
        assert_eq!(sources[0].name, "sql19");
        assert_eq!(sources[0].source_type, "SQL Server");
        assert!(sources.iter().all(|s| !s.is_connected()));
    }

    #[test]
    fn test_database_is_the_secondary_search_key() {
        let sources = seed().unwrap();
        let binew = sources.iter().find(|s| s.name == "BINEW").unwrap();
        assert_eq!(binew.secondary_text(), Some("DW_AICATEST"));
        assert_eq!(
            binew.attribute("type"),
            Some(AttributeValue::Text("SQL Server"))
        );
        assert_eq!(binew.attribute("widgets"), None);
    }
}
