//! Table widget with pinned columns.
//! Thin TUI wrapper over a [`PageView`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::fmt::truncate;
use crate::table::RowKey;
use crate::tui::style::Styles;
use crate::view::{HeaderCell, PageView, ViewCell};

/// Indices of the columns drawn: every pinned column, then the unpinned ones
/// after skipping `scroll` of them.
pub fn visible_columns(headers: &[HeaderCell], scroll: usize) -> Vec<usize> {
    let pinned = headers.iter().take_while(|h| h.is_pinned()).count();
    (0..pinned)
        .chain((pinned + scroll).min(headers.len())..headers.len())
        .collect()
}

fn cell_span(cell: &ViewCell, width: u16) -> Span<'static> {
    let text = truncate(&cell.text, width.saturating_sub(1) as usize);
    match cell.style {
        Some(s) => Span::styled(text, Styles::from_class(s)),
        None => Span::raw(text),
    }
}

pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    page: &PageView<RowKey>,
    cursor: usize,
    scroll: usize,
) {
    let columns = visible_columns(&page.headers, scroll);
    let drawn: u16 = columns.iter().map(|&i| page.headers[i].width).sum();
    let hidden_right = drawn > area.width.saturating_sub(2);
    let title = format!(
        " {}{}{} ",
        if scroll > 0 { "◀ " } else { "" },
        page.title,
        if hidden_right { " ▶" } else { "" },
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());

    frame.render_widget(Clear, area);

    if let Some(message) = &page.empty_message {
        let text = Line::from(Span::styled(message.as_str(), Styles::dim()));
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    // Offsets of pinned columns are fixed, so no spacing is inserted between cells.
    let header = Row::new(columns.iter().map(|&i| {
        let h = &page.headers[i];
        let style = if i == cursor {
            Styles::header_cursor()
        } else if h.is_pinned() {
            Styles::table_header().patch(Styles::pinned())
        } else {
            Styles::table_header()
        };
        Span::styled(truncate(&h.title(), h.width.saturating_sub(1) as usize), style)
    }))
    .style(Styles::table_header())
    .height(1);

    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|vr| {
            let cells = columns.iter().map(|&i| match vr.cells.get(i) {
                Some(cell) => cell_span(cell, page.headers[i].width),
                None => Span::raw(""),
            });
            Row::new(cells).style(Styles::from_class(vr.style)).height(1)
        })
        .collect();

    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|&i| Constraint::Length(page.headers[i].width))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(0);
    frame.render_widget(table, area);
}
