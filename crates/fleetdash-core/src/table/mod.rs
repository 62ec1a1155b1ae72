//! Generic table view-model: filtering, tri-state sorting, pagination.
//!
//! Every dashboard view is a [`TableViewModel`] over its own row type. The
//! row type describes itself through [`TableRow`]: its column registry, which
//! fields are searchable, which field is the category, and how each column
//! extracts a sort value. The pipeline is always
//! `rows -> filter -> sort -> paginate`.

mod columns;
mod filter;
mod paginate;
mod sort;
mod view_model;

pub use columns::*;
pub use filter::*;
pub use paginate::*;
pub use sort::*;
pub use view_model::*;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Errors raised by view-model configuration or user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Page size is not one of the view's allowed sizes.
    InvalidPageSize { requested: usize, allowed: &'static [usize] },
    /// No column with this id in the registry.
    UnknownColumn(String),
    /// Sort requested on a column that is not sortable.
    UnsortableColumn(&'static str),
    /// A pinned column follows an unpinned one.
    PinnedAfterUnpinned(&'static str),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidPageSize { requested, allowed } => {
                write!(f, "invalid page size {requested} (allowed: {allowed:?})")
            }
            TableError::UnknownColumn(id) => write!(f, "unknown column '{id}'"),
            TableError::UnsortableColumn(id) => write!(f, "column '{id}' is not sortable"),
            TableError::PinnedAfterUnpinned(id) => {
                write!(f, "pinned column '{id}' follows an unpinned column")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Comparable value extracted from a row for one column.
///
/// Extractors normalize absent values: empty text, zero, epoch, `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Already lowercased by the extractor.
    Text(String),
    Integer(i64),
    Float(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Flag(bool),
}

impl SortValue {
    /// Lowercased text value, empty for `None`.
    pub fn text(value: Option<&str>) -> Self {
        SortValue::Text(value.map(str::to_lowercase).unwrap_or_default())
    }

    /// Timestamp value, epoch for `None`.
    pub fn timestamp(value: Option<chrono::DateTime<chrono::Utc>>) -> Self {
        SortValue::Timestamp(value.map(|t| t.timestamp_millis()).unwrap_or(0))
    }

    /// Total order within one variant; mismatched variants are equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A record that can be shown in a table view.
pub trait TableRow {
    /// Column key type of this view.
    type Column: Copy + Eq + fmt::Debug + 'static;

    /// Column configuration of this view.
    fn registry() -> &'static ColumnRegistry<Self::Column>;

    /// Stable identity, if the record carries one.
    fn id(&self) -> Option<&str>;

    /// Fields concatenated into the searchable string. `None` contributes nothing.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Value matched by the category filter.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Sort value for `column`. `index` is the row's position in the
    /// filtered sequence right before sorting.
    fn sort_value(&self, column: Self::Column, index: usize) -> SortValue;
}

/// Identity of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RowKey {
    Id(String),
    /// Position in the unfiltered source sequence.
    Position(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => f.write_str(id),
            RowKey::Position(pos) => write!(f, "#{pos}"),
        }
    }
}

/// A row reference together with its position in the source sequence.
#[derive(Debug)]
pub struct SourceRow<'a, R> {
    pub position: usize,
    pub row: &'a R,
}

impl<R> Clone for SourceRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SourceRow<'_, R> {}

impl<'a, R: TableRow> SourceRow<'a, R> {
    pub fn key(&self) -> RowKey {
        match self.row.id() {
            Some(id) if !id.is_empty() => RowKey::Id(id.to_string()),
            _ => RowKey::Position(self.position),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn sort_value_text_normalizes_case_and_absence() {
        assert_eq!(SortValue::text(Some("AbC")), SortValue::Text("abc".into()));
        assert_eq!(SortValue::text(None), SortValue::Text(String::new()));
        assert_eq!(
            SortValue::text(None).compare(&SortValue::text(Some("a"))),
            Ordering::Less
        );
    }

    #[test]
    fn sort_value_absent_timestamp_is_epoch() {
        assert_eq!(SortValue::timestamp(None), SortValue::Timestamp(0));
    }

    #[test]
    fn flags_compare_as_zero_one() {
        assert_eq!(
            SortValue::Flag(false).compare(&SortValue::Flag(true)),
            Ordering::Less
        );
    }

    #[test]
    fn mismatched_variants_are_equal() {
        assert_eq!(
            SortValue::Integer(1).compare(&SortValue::Text("x".into())),
            Ordering::Equal
        );
    }

    #[test]
    fn row_key_falls_back_to_source_position() {
        let mut anonymous = item("", "n", "k", 0);
        anonymous.id = None;
        let with_id = item("a1", "n", "k", 0);
        let empty_id = item("", "n", "k", 0);

        assert_eq!(
            SourceRow { position: 4, row: &anonymous }.key(),
            RowKey::Position(4)
        );
        assert_eq!(
            SourceRow { position: 4, row: &with_id }.key(),
            RowKey::Id("a1".into())
        );
        assert_eq!(
            SourceRow { position: 2, row: &empty_id }.key(),
            RowKey::Position(2)
        );
    }
}
