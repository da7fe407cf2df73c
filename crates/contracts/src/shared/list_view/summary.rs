use super::schema::{CounterRule, CounterSpec, PageSchema, StatusTone, TOTAL_KEY};
use super::{AttributeValue, ListRecord};
use serde::{Deserialize, Serialize};

/// Value of one footer counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterValue {
    pub key: String,
    pub label: String,
    pub tone: StatusTone,
    pub value: u64,
}

/// Footer statistics of a page, computed over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total: u64,
    /// Configured counters in declaration order.
    pub counters: Vec<CounterValue>,
}

impl SummaryCounts {
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Counter by key; `"total"` resolves to the record count.
    pub fn get(&self, key: &str) -> Option<u64> {
        if key == TOTAL_KEY {
            return Some(self.total);
        }
        self.counters.iter().find(|c| c.key == key).map(|c| c.value)
    }
}

/// Evaluate the schema's counters over every record.
///
/// The result does not depend on any filter state.
pub fn summary_counts<R: ListRecord>(records: &[R], schema: &PageSchema) -> SummaryCounts {
    let counters = schema
        .counters
        .iter()
        .map(|spec| CounterValue {
            key: spec.key.clone(),
            label: spec.label.clone(),
            tone: spec.tone,
            value: evaluate(records, spec),
        })
        .collect();

    SummaryCounts {
        total: records.len() as u64,
        counters,
    }
}

fn evaluate<R: ListRecord>(records: &[R], spec: &CounterSpec) -> u64 {
    match &spec.rule {
        CounterRule::Status { equals } => {
            let wanted = equals.to_lowercase();
            records
                .iter()
                .filter(|r| r.status().to_lowercase() == wanted)
                .count() as u64
        }
        CounterRule::Attribute { field, equals } => records
            .iter()
            .filter(|r| attribute_equals(r.attribute(field), equals))
            .count() as u64,
        CounterRule::Sum { field } => records
            .iter()
            .map(|r| match r.attribute(field) {
                Some(AttributeValue::Number(n)) => n,
                _ => 0,
            })
            .sum(),
    }
}

fn attribute_equals(value: Option<AttributeValue<'_>>, equals: &str) -> bool {
    match value {
        Some(AttributeValue::Text(text)) => text.to_lowercase() == equals.to_lowercase(),
        Some(AttributeValue::Number(n)) => equals.trim().parse::<u64>() == Ok(n),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::filter::{visible_records, FilterState};
    use crate::shared::list_view::schema::tests::dashboards_schema;
    use crate::shared::list_view::test_support::Row;

    #[test]
    fn test_counts_status_values() {
        let rows: Vec<Row> = (1..=4).map(|id| Row::new(id, "dash", "Draft")).collect();
        let counts = summary_counts(&rows, &dashboards_schema());
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("draft"), Some(4));
        assert_eq!(counts.get("syncing"), Some(0));
    }

    #[test]
    fn test_unlisted_status_is_counted() {
        let rows = vec![
            Row::new(1, "mktg-test-1", "Draft"),
            Row::new(2, "mktg-test-2", "Syncing"),
        ];
        let counts = summary_counts(&rows, &dashboards_schema());
        assert_eq!(counts.get("syncing"), Some(1));
        assert_eq!(counts.get("draft"), Some(1));
    }

    #[test]
    fn test_empty_collection_yields_zeroes() {
        let rows: Vec<Row> = Vec::new();
        let counts = summary_counts(&rows, &dashboards_schema());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.counters.len(), 4);
        assert!(counts.counters.iter().all(|c| c.value == 0));
    }

    #[test]
    fn test_attribute_and_sum_rules() {
        let rows = vec![
            Row::new(1, "a", "Draft").chart("Bar").widgets(3),
            Row::new(2, "b", "Draft").chart("Pie").widgets(2),
            Row::new(3, "c", "Draft").chart("BAR"),
        ];
        let counts = summary_counts(&rows, &dashboards_schema());
        assert_eq!(counts.get("bar"), Some(2));
        assert_eq!(counts.get("widgets"), Some(5));
    }

    #[test]
    fn test_unknown_attribute_counts_nothing() {
        let mut schema = dashboards_schema();
        schema.counters.push(CounterSpec {
            key: "owners".to_string(),
            label: "Owners".to_string(),
            tone: StatusTone::Neutral,
            rule: CounterRule::Sum {
                field: "owner_count".to_string(),
            },
        });
        let rows = vec![Row::new(1, "a", "Draft")];
        assert_eq!(summary_counts(&rows, &schema).get("owners"), Some(0));
    }

    #[test]
    fn test_counters_keep_declaration_order() {
        let rows = vec![Row::new(1, "a", "Draft")];
        let counts = summary_counts(&rows, &dashboards_schema());
        let keys: Vec<&str> = counts.counters.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["draft", "syncing", "bar", "widgets"]);
        assert_eq!(counts.counters[0].label, "Draft");
        assert_eq!(counts.counters[0].tone, StatusTone::Warning);
    }

    #[test]
    fn test_counts_ignore_filter_state() {
        let rows = vec![Row::new(1, "a", "Draft"), Row::new(2, "b", "Active")];
        let schema = dashboards_schema();
        let filter = FilterState::new().with_status("Active");
        assert_eq!(visible_records(&rows, &filter).len(), 1);
        assert_eq!(summary_counts(&rows, &schema).total(), 2);
    }

    #[test]
    fn test_get_unknown_key() {
        let counts = summary_counts(&Vec::<Row>::new(), &dashboards_schema());
        assert_eq!(counts.get("missing"), None);
        assert_eq!(counts.get("total"), Some(0));
    }
}
