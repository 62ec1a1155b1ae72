//! Page slicing and the page-number navigation window.

use std::fmt;

use serde::{Serialize, Serializer};

/// Maximum number of entries (pages and ellipses) in the navigation window.
pub const PAGE_WINDOW_MAX: usize = 7;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    /// Re-clamps the page for a result set of `count` rows.
    pub fn clamp_to(&mut self, count: usize) {
        self.page = clamp_page(self.page, total_pages(count, self.page_size));
    }
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Clamps `page` into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of a result sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// Page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Zero-based offset of `rows[0]` in the full sequence.
    pub start_index: usize,
}

/// Slices `rows` to the requested page, clamping the page first.
pub fn paginate<'a, T>(rows: &'a [T], state: &PageState) -> Page<'a, T> {
    let total = total_pages(rows.len(), state.page_size);
    let page = clamp_page(state.page, total);
    let start = (page - 1).saturating_mul(state.page_size).min(rows.len());
    let end = start.saturating_add(state.page_size).min(rows.len());
    Page {
        rows: &rows[start..end],
        page,
        total_pages: total,
        start_index: start,
    }
}

/// Entry of the page-number navigation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{n}"),
            PageLink::Ellipsis => f.write_str("…"),
        }
    }
}

/// Pages serialize as numbers, the ellipsis as `"…"`.
impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(n) => serializer.serialize_u64(*n as u64),
            PageLink::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

/// Page buttons for navigation: always the first, last and current page,
/// at most one ellipsis per side, never more than [`PAGE_WINDOW_MAX`] entries.
pub fn page_window(total_pages: usize, page: usize) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    let total = total_pages.max(1);
    let page = clamp_page(page, total);

    if total <= PAGE_WINDOW_MAX {
        (1..=total).map(Page).collect()
    } else if page <= 4 {
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(total)]
    } else if page >= total - 3 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 4),
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(page - 1),
            Page(page),
            Page(page + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// 1-based inclusive range for the "Showing a–b of n" footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl ShowingRange {
    /// `None` for an empty page.
    pub fn of<T>(page: &Page<'_, T>, total: usize) -> Option<Self> {
        if page.rows.is_empty() {
            return None;
        }
        Some(Self {
            first: page.start_index + 1,
            last: page.start_index + page.rows.len(),
            total,
        })
    }
}
