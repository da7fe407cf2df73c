use super::ListRecord;

/// Filter token that disables status filtering. Compared case-sensitively.
pub const ALL_TOKEN: &str = "All";

/// Status selection of a list page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Only records whose status equals the token, ignoring case.
    Only(String),
}

impl StatusFilter {
    /// Build a filter from a vocabulary token. Only the exact `"All"` token is
    /// the sentinel; `"all"` is an ordinary status value.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            StatusFilter::All
        } else {
            StatusFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            StatusFilter::All => ALL_TOKEN,
            StatusFilter::Only(token) => token,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(token) => status.to_lowercase() == token.to_lowercase(),
        }
    }
}

/// Transient search and status selection of one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub status_filter: StatusFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, token: &str) -> Self {
        self.status_filter = StatusFilter::from_token(token);
        self
    }

    /// True when either the query or the status selection narrows the list.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.status_filter.is_all()
    }

    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Filter state with the query lowered once per derivation.
struct Matcher<'f> {
    needle: Option<String>,
    status: &'f StatusFilter,
}

impl<'f> Matcher<'f> {
    fn new(state: &'f FilterState) -> Self {
        let needle = if state.query.is_empty() {
            None
        } else {
            Some(state.query.to_lowercase())
        };
        Self {
            needle,
            status: &state.status_filter,
        }
    }

    fn matches<R: ListRecord>(&self, record: &R) -> bool {
        self.matches_text(record) && self.status.matches(record.status())
    }

    fn matches_text<R: ListRecord>(&self, record: &R) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        if record.name().to_lowercase().contains(needle) {
            return true;
        }
        match record.secondary_text() {
            Some(text) if !text.is_empty() => text.to_lowercase().contains(needle),
            _ => false,
        }
    }
}

/// Records matching `filter`, in their original order.
pub fn visible_records<'a, R: ListRecord>(records: &'a [R], filter: &FilterState) -> Vec<&'a R> {
    let matcher = Matcher::new(filter);
    records.iter().filter(|record| matcher.matches(*record)).collect()
}

/// What the list body should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty.
    NoRecords,
    /// Records exist but none pass the current filter.
    NoMatches,
    Populated,
}

pub fn empty_state(total: usize, visible: usize) -> EmptyState {
    if total == 0 {
        EmptyState::NoRecords
    } else if visible == 0 {
        EmptyState::NoMatches
    } else {
        EmptyState::Populated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::Row;

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new(1, "sql19", "disconnected"),
            Row::new(2, "sql", "disconnected"),
            Row::new(3, "BINEW", "connected").described("testing erp data analytics"),
            Row::new(4, "VISION - SQL19", "error").described("Data source for Vision infra on SQL19"),
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let rows = sample();
        let visible = visible_records(&rows, &FilterState::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_matches_name_substring() {
        let rows = vec![
            Row::new(1, "sql19", "disconnected"),
            Row::new(2, "sql", "disconnected"),
        ];
        let filter = FilterState::new().with_query("19");
        assert_eq!(ids(&visible_records(&rows, &filter)), vec![1]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let rows = sample();
        let upper = visible_records(&rows, &FilterState::new().with_query("SQL"));
        let lower = visible_records(&rows, &FilterState::new().with_query("sql"));
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), vec![1, 2, 4]);
    }

    #[test]
    fn test_query_matches_secondary_text() {
        let rows = sample();
        let filter = FilterState::new().with_query("ERP DATA");
        assert_eq!(ids(&visible_records(&rows, &filter)), vec![3]);
    }

    #[test]
    fn test_missing_secondary_text_never_matches_non_empty_query() {
        let rows = vec![Row::new(1, "alpha", "Draft"), Row::new(2, "beta", "Draft").described("")];
        let filter = FilterState::new().with_query("zzz");
        assert!(visible_records(&rows, &filter).is_empty());
    }

    #[test]
    fn test_status_filter_compares_ignoring_case() {
        let rows = sample();
        let filter = FilterState::new().with_status("Disconnected");
        assert_eq!(ids(&visible_records(&rows, &filter)), vec![1, 2]);

        let upper = vec![Row::new(1, "daily", "ACTIVE"), Row::new(2, "weekly", "PAUSED")];
        let filter = FilterState::new().with_status("active");
        assert_eq!(ids(&visible_records(&upper, &filter)), vec![1]);
    }

    #[test]
    fn test_all_sentinel_is_case_sensitive() {
        assert_eq!(StatusFilter::from_token("All"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_token("all"),
            StatusFilter::Only("all".to_string())
        );

        let rows = sample();
        let filter = FilterState::new().with_status("ALL");
        assert!(visible_records(&rows, &filter).is_empty());
    }

    #[test]
    fn test_query_and_status_must_both_match() {
        let rows = sample();
        let filter = FilterState::new().with_query("sql").with_status("error");
        assert_eq!(ids(&visible_records(&rows, &filter)), vec![4]);
    }

    #[test]
    fn test_status_without_matches_yields_empty() {
        let rows: Vec<Row> = (1..=4).map(|id| Row::new(id, "dash", "Draft")).collect();
        let filter = FilterState::new().with_status("Active");
        assert!(visible_records(&rows, &filter).is_empty());
    }

    #[test]
    fn test_unlisted_status_passes_all_filter() {
        let rows = vec![Row::new(1, "mktg-test-2", "Syncing"), Row::new(2, "other", "Draft")];
        assert_eq!(ids(&visible_records(&rows, &FilterState::new())), vec![1, 2]);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterState::new().is_active());
        assert!(FilterState::new().with_query("x").is_active());
        assert!(FilterState::new().with_status("Draft").is_active());
        assert!(!FilterState::new().with_status("All").is_active());
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(empty_state(0, 0), EmptyState::NoRecords);
        assert_eq!(empty_state(3, 0), EmptyState::NoMatches);
        assert_eq!(empty_state(3, 1), EmptyState::Populated);
    }

    #[test]
    fn test_status_filter_token_is_kept_verbatim() {
        assert_eq!(StatusFilter::All.token(), "All");
        assert_eq!(StatusFilter::from_token("PAUSED").token(), "PAUSED");

        let filter = FilterState::new().with_status("Paused");
        assert_eq!(filter.status_filter.token(), "Paused");
        assert_eq!(filter.clone().with_status("All").status_filter, StatusFilter::All);
    }
}
