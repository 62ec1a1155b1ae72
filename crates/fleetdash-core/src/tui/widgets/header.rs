//! Header widget showing tabs and filter/status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // App name
        Constraint::Min(30),    // Tabs
        Constraint::Length(48), // Filter/Status
    ])
    .split(area);

    frame.render_widget(Paragraph::new(" fleetdash ").style(Styles::header()), chunks[0]);

    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            vec![
                Span::styled(format!(" {}:", i + 1), Styles::tab_inactive()),
                Span::styled(format!("{} ", tab.name()), style),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[1],
    );

    let right = if state.input_mode == InputMode::Filter {
        format!(" /{}_", state.filter_input)
    } else if let Some(msg) = &state.status_message {
        format!(" {}", msg)
    } else if !state.current().query().is_empty() {
        format!(" filter: {}", state.current().query())
    } else {
        " ? help".to_string()
    };
    frame.render_widget(Paragraph::new(right).style(Styles::header()), chunks[2]);
}
