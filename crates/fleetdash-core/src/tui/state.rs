//! Application state management.

use tracing::debug;

use crate::config::ViewConfig;
use crate::model::{Activity, Device, Node};
use crate::table::{CategoryFilter, RowKey, TableRow, TableViewModel};
use crate::view::{PageView, build_activities_view, build_devices_view, build_nodes_view};

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Devices,
    Nodes,
    Activities,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Devices, Tab::Nodes, Tab::Activities]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Devices => "Devices",
            Tab::Nodes => "Nodes",
            Tab::Activities => "Activity",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Devices => Tab::Nodes,
            Tab::Nodes => Tab::Activities,
            Tab::Activities => Tab::Devices,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Devices => Tab::Activities,
            Tab::Nodes => Tab::Devices,
            Tab::Activities => Tab::Nodes,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    Help,
    QuitConfirm,
}

/// Object-safe view over one tab's table model, used by input and render.
pub trait TabView {
    fn page_view(&self) -> PageView<RowKey>;
    fn query(&self) -> &str;
    fn set_query(&mut self, query: &str);
    fn category(&self) -> &CategoryFilter;
    fn set_category(&mut self, category: CategoryFilter);
    fn categories(&self) -> Vec<String>;

    fn column_count(&self) -> usize;
    /// Rendered widths in registry order.
    fn column_widths(&self) -> Vec<u16>;
    fn pinned_count(&self) -> usize;
    /// Header cursor position.
    fn cursor(&self) -> usize;
    fn set_cursor(&mut self, column: usize);
    /// Number of scrollable columns hidden on the left.
    fn scroll(&self) -> usize;
    fn set_scroll(&mut self, scroll: usize);
    /// Tri-state sort click on the column at `column`. False if not sortable.
    fn click_column(&mut self, column: usize) -> bool;
    fn clear_sort(&mut self);

    fn next_page(&mut self);
    fn prev_page(&mut self);
    fn first_page(&mut self);
    fn last_page(&mut self);
    fn cycle_page_size(&mut self, forward: bool);
}

/// Table model of one tab plus its header cursor and horizontal scroll.
pub struct TabModel<R: TableRow> {
    pub vm: TableViewModel<R>,
    build: fn(&TableViewModel<R>) -> PageView<RowKey>,
    cursor: usize,
    scroll: usize,
}

impl<R: TableRow> TabModel<R> {
    pub fn new(
        rows: Vec<R>,
        config: ViewConfig,
        build: fn(&TableViewModel<R>) -> PageView<RowKey>,
    ) -> Self {
        Self {
            vm: TableViewModel::new(rows, config),
            build,
            cursor: 0,
            scroll: 0,
        }
    }
}

impl<R: TableRow> TabView for TabModel<R> {
    fn page_view(&self) -> PageView<RowKey> {
        (self.build)(&self.vm)
    }

    fn query(&self) -> &str {
        &self.vm.filter_state().query
    }

    fn set_query(&mut self, query: &str) {
        self.vm.set_query(query);
    }

    fn category(&self) -> &CategoryFilter {
        &self.vm.filter_state().category
    }

    fn set_category(&mut self, category: CategoryFilter) {
        self.vm.set_category(category);
    }

    fn categories(&self) -> Vec<String> {
        self.vm.categories()
    }

    fn column_count(&self) -> usize {
        R::registry().len()
    }

    fn column_widths(&self) -> Vec<u16> {
        R::registry().columns().iter().map(|c| c.width).collect()
    }

    fn pinned_count(&self) -> usize {
        R::registry().pinned().len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, column: usize) {
        self.cursor = column.min(self.column_count().saturating_sub(1));
    }

    fn scroll(&self) -> usize {
        self.scroll
    }

    fn set_scroll(&mut self, scroll: usize) {
        let scrollable = self.column_count() - self.pinned_count();
        self.scroll = scroll.min(scrollable.saturating_sub(1));
    }

    fn click_column(&mut self, column: usize) -> bool {
        let Some(descriptor) = R::registry().columns().get(column) else {
            return false;
        };
        if !descriptor.sortable {
            return false;
        }
        self.vm.click_header(descriptor.key);
        true
    }

    fn clear_sort(&mut self) {
        self.vm.clear_sort();
    }

    fn next_page(&mut self) {
        self.vm.next_page();
    }

    fn prev_page(&mut self) {
        self.vm.prev_page();
    }

    fn first_page(&mut self) {
        self.vm.first_page();
    }

    fn last_page(&mut self) {
        self.vm.last_page();
    }

    fn cycle_page_size(&mut self, forward: bool) {
        self.vm.cycle_page_size(forward);
    }
}

/// Main application state.
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Filter input buffer.
    pub filter_input: String,
    /// Active popup state.
    pub popup: PopupState,
    pub devices: TabModel<Device>,
    pub nodes: TabModel<Node>,
    pub activities: TabModel<Activity>,
    /// Temporary status message shown in the header (e.g., why an action was blocked).
    pub status_message: Option<String>,
    /// Cells available to table columns; the cursor column is kept inside it.
    pub table_width: u16,
}

impl AppState {
    pub fn new(devices: Vec<Device>, nodes: Vec<Node>, activities: Vec<Activity>) -> Self {
        debug!(
            devices = devices.len(),
            nodes = nodes.len(),
            activities = activities.len(),
            "dashboard state created"
        );
        Self {
            current_tab: Tab::Devices,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            popup: PopupState::None,
            devices: TabModel::new(devices, ViewConfig::DEVICES, build_devices_view),
            nodes: TabModel::new(nodes, ViewConfig::NODES, build_nodes_view),
            activities: TabModel::new(activities, ViewConfig::ACTIVITIES, build_activities_view),
            status_message: None,
            table_width: u16::MAX,
        }
    }

    pub fn current(&self) -> &dyn TabView {
        match self.current_tab {
            Tab::Devices => &self.devices,
            Tab::Nodes => &self.nodes,
            Tab::Activities => &self.activities,
        }
    }

    pub fn current_mut(&mut self) -> &mut dyn TabView {
        match self.current_tab {
            Tab::Devices => &mut self.devices,
            Tab::Nodes => &mut self.nodes,
            Tab::Activities => &mut self.activities,
        }
    }

    /// Switches tabs; the filter buffer follows the new tab's query.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.filter_input = self.current().query().to_string();
        self.status_message = None;
    }

    /// Advances the category filter: all -> each category in first-seen order -> all.
    pub fn cycle_category(&mut self, forward: bool) {
        let view = self.current_mut();
        let mut options = vec![CategoryFilter::All];
        options.extend(view.categories().into_iter().map(CategoryFilter::Only));

        let current = options.iter().position(|c| c == view.category()).unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let category = options.swap_remove(next);
        debug!(%category, "category filter changed");
        view.set_category(category);
    }

    /// Moves the header cursor, scrolling so that its column stays drawn.
    pub fn move_cursor(&mut self, delta: isize) {
        let view = self.current_mut();
        let cursor = view.cursor().saturating_add_signed(delta);
        view.set_cursor(cursor);
        self.reveal_cursor();
    }

    /// Updates the table width after a resize.
    pub fn set_table_width(&mut self, width: u16) {
        if self.table_width != width {
            self.table_width = width;
            self.reveal_cursor();
        }
    }

    /// Scrolls the current tab so the cursor column is fully inside
    /// `table_width`. Pinned columns are always drawn.
    fn reveal_cursor(&mut self) {
        let width = u32::from(self.table_width);
        let view = self.current_mut();
        let cursor = view.cursor();
        let pinned = view.pinned_count();
        if cursor < pinned {
            return;
        }
        let column = cursor - pinned;
        if column < view.scroll() {
            view.set_scroll(column);
            return;
        }

        let widths = view.column_widths();
        let pinned_span: u32 = widths[..pinned].iter().copied().map(u32::from).sum();
        let mut scroll = view.scroll();
        while scroll < column {
            let span: u32 = widths[pinned + scroll..=cursor]
                .iter()
                .copied()
                .map(u32::from)
                .sum();
            if pinned_span + span <= width {
                break;
            }
            scroll += 1;
        }
        view.set_scroll(scroll);
    }

    pub fn scroll_horizontal(&mut self, delta: isize) {
        let view = self.current_mut();
        let scroll = view.scroll().saturating_add_signed(delta);
        view.set_scroll(scroll);
    }

    /// Sort click on the header under the cursor.
    pub fn click_cursor_column(&mut self) {
        let view = self.current_mut();
        let cursor = view.cursor();
        if view.click_column(cursor) {
            self.status_message = None;
        } else {
            self.status_message = Some("Column is not sortable".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activities() -> Vec<Activity> {
        serde_json::from_str(
            r#"[
                {"_id": "a1", "type": "live", "action": "b"},
                {"_id": "a2", "type": "playback", "action": "a"},
                {"_id": "a3", "type": "live", "action": "c"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn tabs_keep_independent_state() {
        let mut state = AppState::new(Vec::new(), Vec::new(), activities());
        state.switch_tab(Tab::Activities);
        state.current_mut().set_query("live");
        state.switch_tab(Tab::Devices);
        assert_eq!(state.current().query(), "");
        assert_eq!(state.filter_input, "");
        state.switch_tab(Tab::Activities);
        assert_eq!(state.filter_input, "live");
    }

    #[test]
    fn category_cycle_wraps_through_all() {
        let mut state = AppState::new(Vec::new(), Vec::new(), activities());
        state.switch_tab(Tab::Activities);
        state.cycle_category(true);
        assert_eq!(*state.current().category(), CategoryFilter::Only("live".into()));
        state.cycle_category(true);
        assert_eq!(
            *state.current().category(),
            CategoryFilter::Only("playback".into())
        );
        state.cycle_category(true);
        assert!(state.current().category().is_all());
        state.cycle_category(false);
        assert_eq!(
            *state.current().category(),
            CategoryFilter::Only("playback".into())
        );
    }

    #[test]
    fn unsortable_cursor_column_sets_status() {
        let mut state = AppState::new(Vec::new(), Vec::new(), activities());
        state.switch_tab(Tab::Activities);
        state.click_cursor_column();
        assert!(state.status_message.is_some());
        state.move_cursor(4);
        state.click_cursor_column();
        assert!(state.status_message.is_none());
        assert_eq!(
            state.activities.vm.sort_state().key(),
            Some(crate::view::ActivityColumn::Action)
        );
    }

    #[test]
    fn cursor_moving_right_scrolls_hidden_column_into_view() {
        let mut state = AppState::new(Vec::new(), Vec::new(), activities());
        state.switch_tab(Tab::Activities);
        // Pinned 24 cells, then node alias 16, type 11, action 24, time 22.
        state.set_table_width(60);

        state.move_cursor(3);
        assert_eq!(state.current().cursor(), 3);
        assert_eq!(state.current().scroll(), 0);

        state.move_cursor(1);
        assert_eq!(state.current().scroll(), 1);
        state.move_cursor(1);
        assert_eq!(state.current().scroll(), 3);

        state.move_cursor(-3);
        assert_eq!(state.current().cursor(), 2);
        assert_eq!(state.current().scroll(), 0);
    }

    #[test]
    fn cursor_and_scroll_are_bounded() {
        let mut state = AppState::new(Vec::new(), Vec::new(), activities());
        state.switch_tab(Tab::Activities);
        state.move_cursor(100);
        assert_eq!(state.current().cursor(), 6);
        state.scroll_horizontal(100);
        assert_eq!(state.current().scroll(), 4);
        state.move_cursor(-4);
        assert_eq!(state.current().cursor(), 2);
        assert_eq!(state.current().scroll(), 0);
        state.move_cursor(-10);
        assert_eq!(state.current().cursor(), 0);
    }
}
