//! Footer: "Showing a–b of n", page window and page size.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::table::{PageLink, RowKey};
use crate::tui::style::Styles;
use crate::view::PageView;

pub fn render_footer(frame: &mut Frame, area: Rect, page: &PageView<RowKey>) {
    let mut spans = vec![
        Span::styled(format!(" {}", page.showing), Styles::dim()),
        Span::raw("   "),
    ];
    for link in &page.window {
        let style = match link {
            PageLink::Page(n) if *n == page.page => Styles::header_cursor(),
            PageLink::Page(_) => Styles::default(),
            PageLink::Ellipsis => Styles::dim(),
        };
        spans.push(Span::styled(format!(" {} ", link), style));
    }
    spans.push(Span::styled(
        format!("   {} / page", page.page_size),
        Styles::dim(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
