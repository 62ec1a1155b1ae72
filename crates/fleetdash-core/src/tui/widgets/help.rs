//! Key binding reference popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;
use crate::tui::style::Styles;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / 1-3", "switch view"),
    ("/", "search (Enter keeps, Esc clears)"),
    ("c / C", "next / previous category"),
    ("← → h l", "move column cursor"),
    ("s / Enter", "sort column: asc, desc, off"),
    ("x", "clear sort"),
    ("[ ]", "scroll unpinned columns"),
    ("n p", "next / previous page"),
    ("Home End", "first / last page"),
    ("+ -", "page size"),
    ("q", "quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let height = BINDINGS.len() as u16 + 4;
    let popup_area = centered(area, 52, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keys (Esc closes) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    lines.extend(BINDINGS.iter().map(|(keys, what)| {
        Line::from(vec![
            Span::styled(format!(" {:<12}", keys), Styles::key()),
            Span::raw(*what),
        ])
    }));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Styles::default()),
        popup_area,
    );
}
