use crate::domain::common::{parse_seed, PageKey, RecordId};
use crate::shared::error::CatalogError;
use crate::shared::list_view::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

/// Visualization used to answer a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
    Table,
    #[serde(other)]
    Other,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Pie => "Pie",
            ChartType::Area => "Area",
            ChartType::Table => "Table",
            ChartType::Other => "Other",
        }
    }

    /// Icon name used by the frontend.
    pub fn icon(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar-chart",
            ChartType::Line => "trending-up",
            ChartType::Pie => "pie-chart",
            ChartType::Area => "activity",
            ChartType::Table | ChartType::Other => "table",
        }
    }
}

/// Saved analytical question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: String,
    pub chart_type: ChartType,
    pub status: String,
    pub updated: String,
}

impl ListRecord for Question {
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
            "chart_type" => Some(AttributeValue::Text(self.chart_type.as_str())),
            "groups" => Some(AttributeValue::Text(&self.groups)),
            "updated" => Some(AttributeValue::Text(&self.updated)),
            _ => None,
        }
    }
}

const SEED_JSON: &str = include_str!("seed.json");

pub fn seed() -> Result<Vec<Question>, CatalogError> {
    parse_seed(PageKey::Questions, SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads() {
        let questions = seed().unwrap();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].chart_type, ChartType::Bar);
        assert_eq!(questions[1].chart_type, ChartType::Pie);
    }

    #[test]
    fn test_unknown_chart_type_deserializes_as_other() {
        let json = r#"{"id":1,"name":"q","chartType":"Radar","status":"Draft","updated":"Never"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.chart_type, ChartType::Other);
        assert_eq!(question.description, "");
    }

    #[test]
    fn test_chart_type_attribute() {
        let questions = seed().unwrap();
        assert_eq!(
            questions[0].attribute("chart_type"),
            Some(AttributeValue::Text("Bar"))
        );
    }
}
