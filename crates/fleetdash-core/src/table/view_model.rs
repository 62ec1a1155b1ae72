//! Per-view state composition: filter -> sort -> paginate.

use tracing::debug;

use crate::config::ViewConfig;

use super::{
    CategoryFilter, FilterState, PageLink, PageState, RowKey, ShowingRange, SortState, SourceRow,
    TableError, TableRow, categories, filter, page_window, paginate, sort,
};

/// One rendered row of a page.
#[derive(Debug)]
pub struct PageRow<'a, R> {
    /// 1-based serial number within the whole result set.
    pub ordinal: usize,
    pub key: RowKey,
    pub row: &'a R,
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct TablePage<'a, R> {
    pub rows: Vec<PageRow<'a, R>>,
    /// Rows left after filtering.
    pub result_count: usize,
    /// Rows in the unfiltered source.
    pub source_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Zero-based offset of the first row on this page.
    pub start_index: usize,
    pub window: Vec<PageLink>,
    pub showing: Option<ShowingRange>,
}

/// State of one table view: its rows plus filter, sort and page state.
///
/// Every instance is independent; views never share state.
#[derive(Debug)]
pub struct TableViewModel<R: TableRow> {
    rows: Vec<R>,
    filter: FilterState,
    sort: SortState<R::Column>,
    page: PageState,
    config: ViewConfig,
}

impl<R: TableRow> TableViewModel<R> {
    pub fn new(rows: Vec<R>, config: ViewConfig) -> Self {
        Self {
            rows,
            filter: FilterState::default(),
            sort: SortState::default(),
            page: PageState::new(config.default_page_size),
            config,
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> &SortState<R::Column> {
        &self.sort
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Swaps in a new row set, keeping filter and sort, re-clamping the page.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.reclamp();
    }

    /// Sets the search text. Resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.page.page = 1;
        debug!(query = %self.filter.query, "search changed");
    }

    /// Sets the category selector. Resets to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.page.page = 1;
        debug!(category = %self.filter.category, "category changed");
    }

    /// Distinct category values of the full row set.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.rows)
    }

    /// Header click on `column`. Ignored for unsortable columns; keeps the page.
    pub fn click_header(&mut self, column: R::Column) {
        if !R::registry().is_sortable(column) {
            return;
        }
        self.sort.click(column);
        self.reclamp();
        debug!(
            column = ?self.sort.key(),
            direction = ?self.sort.direction(),
            "sort changed"
        );
    }

    /// Header click by column id. Unlike [`Self::click_header`], an
    /// unsortable column is an error.
    pub fn click_header_id(&mut self, id: &str) -> Result<(), TableError> {
        let column = R::registry().find(id)?;
        if !column.sortable {
            return Err(TableError::UnsortableColumn(column.id));
        }
        self.click_header(column.key);
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.reclamp();
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page.page = page;
        self.reclamp();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(usize::MAX);
    }

    /// Changes the page size. Must be one of the allowed sizes; resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if !self.config.page_sizes.contains(&page_size) {
            return Err(TableError::InvalidPageSize {
                requested: page_size,
                allowed: self.config.page_sizes,
            });
        }
        self.page = PageState::new(page_size);
        debug!(page_size, "page size changed");
        Ok(())
    }

    /// Steps to the next (`forward`) or previous allowed page size, saturating.
    pub fn cycle_page_size(&mut self, forward: bool) {
        let sizes = self.config.page_sizes;
        let idx = sizes
            .iter()
            .position(|&s| s == self.page.page_size)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1).min(sizes.len().saturating_sub(1))
        } else {
            idx.saturating_sub(1)
        };
        if let Some(&size) = sizes.get(next) {
            self.page = PageState::new(size);
        }
    }

    /// Rows passing the current filter, in source order.
    pub fn filtered(&self) -> Vec<SourceRow<'_, R>> {
        filter(&self.rows, &self.filter)
    }

    /// Filtered rows in display order.
    pub fn sorted(&self) -> Vec<SourceRow<'_, R>> {
        sort(self.filtered(), &self.sort)
    }

    /// Runs the full pipeline for the current state.
    pub fn compute(&self) -> TablePage<'_, R> {
        let sorted = self.sorted();
        let page = paginate(&sorted, &self.page);
        let showing = ShowingRange::of(&page, sorted.len());
        let rows = page
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| PageRow {
                ordinal: page.start_index + i + 1,
                key: r.key(),
                row: r.row,
            })
            .collect();

        debug!(
            source = self.rows.len(),
            results = sorted.len(),
            page = page.page,
            total_pages = page.total_pages,
            "table recomputed"
        );

        TablePage {
            rows,
            result_count: sorted.len(),
            source_count: self.rows.len(),
            page: page.page,
            page_size: self.page.page_size,
            total_pages: page.total_pages,
            start_index: page.start_index,
            window: page_window(page.total_pages, page.page),
            showing,
        }
    }

    fn reclamp(&mut self) {
        let count = self.filtered().len();
        self.page.clamp_to(count);
    }
}
