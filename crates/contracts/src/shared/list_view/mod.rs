//! Generic list view model shared by every record page.
//!
//! A page is described by a [`schema::PageSchema`] (filter vocabulary, status
//! tones, footer counters) and a collection of records implementing
//! [`ListRecord`]. From those two inputs the view model derives:
//!
//! - the visible subset for the current [`filter::FilterState`]
//!   ([`filter::visible_records`]);
//! - the footer statistics over the whole collection
//!   ([`summary::summary_counts`]);
//! - which empty-state message to show ([`filter::empty_state`]).
//!
//! All derivations are pure functions of their inputs.

pub mod filter;
pub mod highlight;
pub mod schema;
pub mod summary;

pub use filter::{empty_state, visible_records, EmptyState, FilterState, StatusFilter, ALL_TOKEN};
pub use highlight::{highlight_segments, Segment};
pub use schema::{CounterRule, CounterSpec, FilterOption, FilterStyle, PageSchema, StatusTone};
pub use summary::{summary_counts, CounterValue, SummaryCounts};

use crate::domain::common::RecordId;

/// A named attribute value exposed for counter evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    Text(&'a str),
    Number(u64),
}

/// A record that can be listed, searched and counted.
pub trait ListRecord {
    fn id(&self) -> RecordId;

    /// Primary display string and search key.
    fn name(&self) -> &str;

    /// Secondary search key. Most pages use the description; some pages
    /// substitute another identifying field (e.g. the connection target).
    fn secondary_text(&self) -> Option<&str>;

    fn status(&self) -> &str;

    /// Page-specific descriptive attribute by field name.
    ///
    /// Attributes only feed footer counters, never filtering.
    fn attribute(&self, _field: &str) -> Option<AttributeValue<'_>> {
        None
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal record used by the view model tests.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: u32,
        pub name: &'static str,
        pub description: Option<&'static str>,
        pub status: &'static str,
        pub chart: &'static str,
        pub widgets: u64,
    }

    impl Row {
        pub fn new(id: u32, name: &'static str, status: &'static str) -> Self {
            Self {
                id,
                name,
                description: None,
                status,
                chart: "",
                widgets: 0,
            }
        }

        pub fn described(mut self, description: &'static str) -> Self {
            self.description = Some(description);
            self
        }

        pub fn chart(mut self, chart: &'static str) -> Self {
            self.chart = chart;
            self
        }

        pub fn widgets(mut self, widgets: u64) -> Self {
            self.widgets = widgets;
            self
        }
    }

    impl ListRecord for Row {
        fn id(&self) -> RecordId {
            RecordId(self.id)
        }

        fn name(&self) -> &str {
            self.name
        }

        fn secondary_text(&self) -> Option<&str> {
            self.description
        }

        fn status(&self) -> &str {
            self.status
        }

        fn attribute(&self, field: &str) -> Option<AttributeValue<'_>> {
            match field {
                "chart_type" => Some(AttributeValue::Text(self.chart)),
                "widgets" => Some(AttributeValue::Number(self.widgets)),
                _ => None,
            }
        }
    }
}
