//! Static column configuration and the pinned-column offset model.
//!
//! Pinned columns keep a fixed horizontal position while the rest of the table
//! scrolls. Their offsets are the running sum of the widths of the pinned
//! columns before them, so pinned widths must be fixed, never derived from
//! cell content.

use std::fmt;

use super::TableError;

/// Describes one column of a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor<K> {
    /// Column key passed to the row's sort-value extractor.
    pub key: K,
    /// Stable machine name (command line, JSON output).
    pub id: &'static str,
    /// Header label.
    pub label: &'static str,
    pub sortable: bool,
    /// Stays visible during horizontal scroll.
    pub pinned: bool,
    /// Fixed rendered width in terminal cells.
    pub width: u16,
}

/// Ordered, static list of columns for one view.
pub struct ColumnRegistry<K: 'static> {
    columns: &'static [ColumnDescriptor<K>],
}

impl<K: fmt::Debug + 'static> fmt::Debug for ColumnRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.columns.iter().map(|c| c.id))
            .finish()
    }
}

impl<K: Copy + PartialEq + 'static> ColumnRegistry<K> {
    pub const fn new(columns: &'static [ColumnDescriptor<K>]) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &'static [ColumnDescriptor<K>] {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, key: K) -> Option<&'static ColumnDescriptor<K>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Looks a column up by its machine name (case-insensitive).
    pub fn find(&self, id: &str) -> Result<&'static ColumnDescriptor<K>, TableError> {
        self.columns
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| TableError::UnknownColumn(id.to_string()))
    }

    pub fn is_sortable(&self, key: K) -> bool {
        self.get(key).is_some_and(|c| c.sortable)
    }

    /// Checks that pinned columns form a contiguous prefix.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen_unpinned = false;
        for column in self.columns {
            if column.pinned && seen_unpinned {
                return Err(TableError::PinnedAfterUnpinned(column.id));
            }
            seen_unpinned |= !column.pinned;
        }
        Ok(())
    }

    /// The pinned prefix.
    pub fn pinned(&self) -> &'static [ColumnDescriptor<K>] {
        let n = self.columns.iter().take_while(|c| c.pinned).count();
        &self.columns[..n]
    }

    /// Columns after the pinned prefix, in order.
    pub fn scrollable(&self) -> &'static [ColumnDescriptor<K>] {
        &self.columns[self.pinned().len()..]
    }

    /// Horizontal offset of every pinned column, in registry order.
    pub fn pinned_offsets(&self) -> Vec<u16> {
        self.pinned()
            .iter()
            .scan(0u16, |acc, c| {
                let offset = *acc;
                *acc = acc.saturating_add(c.width);
                Some(offset)
            })
            .collect()
    }

    /// Offset of a pinned column, `None` for unpinned or unknown keys.
    pub fn offset_of(&self, key: K) -> Option<u16> {
        let idx = self.pinned().iter().position(|c| c.key == key)?;
        self.pinned_offsets().get(idx).copied()
    }

    /// Total width taken by the pinned prefix (where scrolling starts).
    pub fn pinned_span(&self) -> u16 {
        self.pinned()
            .iter()
            .fold(0u16, |acc, c| acc.saturating_add(c.width))
    }
}
