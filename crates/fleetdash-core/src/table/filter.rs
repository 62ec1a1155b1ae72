//! Free-text and category filtering.

use std::fmt;

use super::{SourceRow, TableRow};

/// Category selector value. `"all"` matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a selector value; `"all"` (any case) and empty mean [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact match against the row's category value.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(value) => f.write_str(value),
        }
    }
}

/// Search text plus category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    /// True when neither a query nor a category is applied.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_all()
    }
}

/// Lowercased concatenation of the row's present, non-empty search fields.
pub fn searchable_text<R: TableRow>(row: &R) -> String {
    row.search_fields()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Order-preserving filter. Each result keeps its source position.
pub fn filter<'a, R: TableRow>(rows: &'a [R], state: &FilterState) -> Vec<SourceRow<'a, R>> {
    let query = state.query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| state.category.matches(row.category()))
        .filter(|(_, row)| query.is_empty() || searchable_text(*row).contains(&query))
        .map(|(position, row)| SourceRow { position, row })
        .collect()
}

/// Distinct category values in first-seen order.
pub fn categories<R: TableRow>(rows: &[R]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for category in rows.iter().filter_map(|r| r.category()) {
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    fn rows() -> Vec<Item> {
        vec![
            item("a", "Camera North", "live", 3),
            item("b", "camera south", "playback", 1),
            item("c", "Gate", "live", 2),
            item("d", "Lobby", "analytics", 5),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let rows = rows();
        let out = filter(&rows, &FilterState::default());
        assert_eq!(ids(&out), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let rows = rows();
        let state = FilterState {
            query: "CAMERA".into(),
            ..FilterState::default()
        };
        let out = filter(&rows, &state);
        assert_eq!(ids(&out), vec!["a", "b"]);
        for r in &out {
            assert!(searchable_text(r.row).contains("camera"));
        }
    }

    #[test]
    fn category_and_query_combine() {
        let rows = rows();
        let state = FilterState {
            query: "a".into(),
            category: CategoryFilter::Only("live".into()),
        };
        assert_eq!(ids(&filter(&rows, &state)), vec!["a", "c"]);
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        let mut row = item("x", "Gate", "live", 0);
        row.kind = None;
        assert_eq!(searchable_text(&row), "gate");

        let rows = vec![row];
        let state = FilterState {
            query: "null".into(),
            ..FilterState::default()
        };
        assert!(filter(&rows, &state).is_empty());
    }

    #[test]
    fn results_keep_source_positions() {
        let rows = rows();
        let state = FilterState {
            query: String::new(),
            category: CategoryFilter::Only("live".into()),
        };
        let positions: Vec<usize> = filter(&rows, &state).iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(categories(&rows()), vec!["live", "playback", "analytics"]);
    }

    #[test]
    fn category_parse_handles_all() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("live"),
            CategoryFilter::Only("live".into())
        );
    }
}
