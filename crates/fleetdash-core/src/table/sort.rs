//! Tri-state single-column sorting.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::{SourceRow, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and direction, or no sort at all.
///
/// Key and direction are stored together, so "no direction" and "no key"
/// cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    active: Option<(K, SortDirection)>,
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self {
            active: Some((key, direction)),
        }
    }

    pub fn key(&self) -> Option<K> {
        self.active.map(|(k, _)| k)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, d)| d)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_for(&self, key: K) -> Option<SortDirection> {
        match self.active {
            Some((k, d)) if k == key => Some(d),
            _ => None,
        }
    }

    /// Header click: a new column starts ascending; the active column
    /// cycles ascending -> descending -> cleared.
    pub fn click(&mut self, key: K) {
        self.active = match self.active {
            Some((k, SortDirection::Ascending)) if k == key => {
                Some((key, SortDirection::Descending))
            }
            Some((k, SortDirection::Descending)) if k == key => None,
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Sorts filtered rows by the active column.
///
/// Without an active sort the input order is returned untouched. Ties are
/// broken by each row's position in the input, so equal keys keep their
/// filtered order in both directions.
pub fn sort<'a, R: TableRow>(
    rows: Vec<SourceRow<'a, R>>,
    state: &SortState<R::Column>,
) -> Vec<SourceRow<'a, R>> {
    let Some((key, direction)) = state.active else {
        return rows;
    };

    let mut decorated: Vec<(super::SortValue, usize, SourceRow<'a, R>)> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| (row.row.sort_value(key, index), index, row))
        .collect();

    decorated.sort_unstable_by(|(va, ia, _), (vb, ib, _)| {
        let cmp = match direction {
            SortDirection::Ascending => va.compare(vb),
            SortDirection::Descending => vb.compare(va),
        };
        if cmp == Ordering::Equal {
            ia.cmp(ib)
        } else {
            cmp
        }
    });

    decorated.into_iter().map(|(_, _, row)| row).collect()
}
