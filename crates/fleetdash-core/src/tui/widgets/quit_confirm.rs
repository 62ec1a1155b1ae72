//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;
use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_area = centered(area, (area.width / 2).clamp(36, 56), 7);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit fleetdash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from("Are you sure you want to quit?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("q", Styles::key()),
            Span::styled(" → quit", Styles::dim()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("n", Styles::key()),
            Span::styled(" → cancel", Styles::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Styles::default());
    frame.render_widget(paragraph, inner);
}
