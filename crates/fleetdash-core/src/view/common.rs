//! UI-agnostic page view types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The TUI maps them to ratatui styles, the `print`
//! command to plain text or JSON.

use serde::Serialize;

use crate::fmt::format_showing;
use crate::model::{ActionKind, ActivityType, ContainerState, RecordStatus};
use crate::table::{
    PageLink, PageRow, RowKey, SortDirection, TableRow, TableViewModel,
};

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level (TUI: yellow).
    Warning,
    /// Critical level (TUI: red).
    Critical,
    /// Positive/active (TUI: green). E.g. "active" status.
    Active,
    /// Dimmed (TUI: dark gray). E.g. absent values.
    Dimmed,
    /// Accent (TUI: cyan). E.g. live activity type.
    Accent,
    /// Secondary accent (TUI: magenta). E.g. playback activity type.
    Highlight,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }

    /// Text cell that dims the absent-value dash.
    pub fn text_or_dash(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::plain(v.to_string()),
            _ => Self::styled(crate::fmt::DASH.to_string(), RowStyleClass::Dimmed),
        }
    }

    pub fn badge(badge: &impl Badge) -> Self {
        Self::styled(badge.label().to_string(), badge.style())
    }
}

/// Closed classification rendered as a colored label.
pub trait Badge {
    fn label(&self) -> &str;
    fn style(&self) -> RowStyleClass;
}

impl Badge for RecordStatus {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> RowStyleClass {
        match self {
            RecordStatus::Active => RowStyleClass::Active,
            RecordStatus::Inactive => RowStyleClass::Critical,
            RecordStatus::Unknown(_) => RowStyleClass::Normal,
        }
    }
}

impl Badge for ContainerState {
    fn label(&self) -> &str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Stopped => "stopped",
        }
    }

    fn style(&self) -> RowStyleClass {
        match self {
            ContainerState::Running => RowStyleClass::Active,
            ContainerState::Stopped => RowStyleClass::Normal,
        }
    }
}

impl Badge for ActivityType {
    fn label(&self) -> &str {
        self.as_str()
    }

    fn style(&self) -> RowStyleClass {
        match self {
            ActivityType::Live => RowStyleClass::Accent,
            ActivityType::Playback => RowStyleClass::Highlight,
            ActivityType::Analytics => RowStyleClass::Warning,
            ActivityType::Streamer => RowStyleClass::Active,
            ActivityType::Unknown(_) => RowStyleClass::Normal,
        }
    }
}

impl Badge for ActionKind {
    fn label(&self) -> &str {
        match self {
            ActionKind::Started => "started",
            ActionKind::Stopped => "stopped",
            ActionKind::Error => "error",
            ActionKind::Restart => "restart",
            ActionKind::Other => "other",
        }
    }

    fn style(&self) -> RowStyleClass {
        match self {
            ActionKind::Started => RowStyleClass::Active,
            ActionKind::Stopped => RowStyleClass::Dimmed,
            ActionKind::Error => RowStyleClass::Critical,
            ActionKind::Restart => RowStyleClass::Warning,
            ActionKind::Other => RowStyleClass::Normal,
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow<Id> {
    pub id: Id,
    /// 1-based serial number (S.No).
    pub ordinal: usize,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Column header with its sort indicator and pinned offset.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
    /// Horizontal offset in cells; `Some` only for pinned columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_offset: Option<u16>,
    pub width: u16,
}

impl HeaderCell {
    pub fn is_pinned(&self) -> bool {
        self.pinned_offset.is_some()
    }

    /// Label with the sort arrow appended when active.
    pub fn title(&self) -> String {
        match self.sort {
            Some(dir) => format!("{} {}", self.label, dir.arrow()),
            None => self.label.to_string(),
        }
    }
}

/// Count shown in the summary strip above the table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryChip {
    pub label: &'static str,
    pub value: usize,
    pub style: RowStyleClass,
}

impl SummaryChip {
    pub fn new(label: &'static str, value: usize, style: RowStyleClass) -> Self {
        Self {
            label,
            value,
            style,
        }
    }
}

/// Complete page ready to be rendered by any frontend.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<Id> {
    pub title: &'static str,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<ViewRow<Id>>,
    pub summary: Vec<SummaryChip>,
    /// `"Sorted by Action ▲"` when a sort is active.
    pub sort_label: Option<String>,
    pub query: String,
    pub category: String,
    pub categories: Vec<String>,
    /// `"Showing 1–10 of 42 devices"`.
    pub showing: String,
    pub result_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub window: Vec<PageLink>,
    pub page_size: usize,
    pub page_sizes: &'static [usize],
    /// Set only when the page has no rows.
    pub empty_message: Option<String>,
}

/// Headers of a view in registry order, annotated with the current sort.
pub fn headers<R: TableRow>(vm: &TableViewModel<R>) -> Vec<HeaderCell> {
    let registry = R::registry();
    let sort = vm.sort_state();
    registry
        .columns()
        .iter()
        .map(|c| HeaderCell {
            id: c.id,
            label: c.label,
            sortable: c.sortable,
            sort: sort.direction_for(c.key),
            pinned_offset: registry.offset_of(c.key),
            width: c.width,
        })
        .collect()
}

/// `"Sorted by <label> ▲/▼"`, or `None` without an active sort.
pub fn sort_label<R: TableRow>(vm: &TableViewModel<R>) -> Option<String> {
    let sort = vm.sort_state();
    let key = sort.key()?;
    let dir = sort.direction()?;
    let column = R::registry().get(key)?;
    Some(format!("Sorted by {} {}", column.label, dir.arrow()))
}

/// Empty-state message for a view that produced no rows.
pub fn empty_message<R: TableRow>(vm: &TableViewModel<R>, noun: &str) -> String {
    if vm.filter_state().is_empty() {
        format!("No {} found.", noun)
    } else {
        format!("No {} match your filters.", noun)
    }
}

/// Runs the pipeline and assembles the page; `row_fn` renders one row's cells.
///
/// A trailing "Showing" chip with the filtered count is appended to `summary`.
pub fn build_page<R, F>(
    vm: &TableViewModel<R>,
    title: &'static str,
    noun: &str,
    mut summary: Vec<SummaryChip>,
    row_fn: F,
) -> PageView<RowKey>
where
    R: TableRow,
    F: Fn(&PageRow<'_, R>) -> (Vec<ViewCell>, RowStyleClass),
{
    let table = vm.compute();
    let rows: Vec<ViewRow<RowKey>> = table
        .rows
        .iter()
        .map(|r| {
            let (cells, style) = row_fn(r);
            ViewRow {
                id: r.key.clone(),
                ordinal: r.ordinal,
                cells,
                style,
            }
        })
        .collect();

    let empty_message = rows.is_empty().then(|| empty_message(vm, noun));
    summary.push(SummaryChip::new(
        "Showing",
        table.result_count,
        RowStyleClass::Accent,
    ));
    let filter = vm.filter_state();

    PageView {
        title,
        headers: headers(vm),
        rows,
        summary,
        sort_label: sort_label(vm),
        query: filter.query.clone(),
        category: filter.category.to_string(),
        categories: vm.categories(),
        showing: format_showing(table.showing, table.result_count, noun),
        result_count: table.result_count,
        page: table.page,
        total_pages: table.total_pages,
        window: table.window,
        page_size: table.page_size,
        page_sizes: vm.config().page_sizes,
        empty_message,
    }
}
