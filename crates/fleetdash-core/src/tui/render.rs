//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState};
use super::widgets::{
    render_footer, render_header, render_help, render_quit_confirm, render_summary, render_table,
    render_toolbar,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Summary chips
        Constraint::Length(1), // Search / category / sort
        Constraint::Min(5),    // Table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let view = state.current();
    let page = view.page_view();

    render_header(frame, chunks[0], state);
    render_summary(frame, chunks[1], &page);
    render_toolbar(frame, chunks[2], &page);
    render_table(frame, chunks[3], &page, view.cursor(), view.scroll());
    render_footer(frame, chunks[4], &page);

    match state.popup {
        PopupState::Help => render_help(frame, area),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}
