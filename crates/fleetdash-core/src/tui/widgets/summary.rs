//! Summary chips and the filter/sort toolbar above the table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::table::RowKey;
use crate::tui::style::Styles;
use crate::view::PageView;

pub fn render_summary(frame: &mut Frame, area: Rect, page: &PageView<RowKey>) {
    let chips: Vec<Span> = page
        .summary
        .iter()
        .flat_map(|chip| {
            vec![
                Span::styled(format!(" {} ", chip.label), Styles::dim()),
                Span::styled(chip.value.to_string(), Styles::from_class(chip.style)),
                Span::raw("  "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(chips)), area);
}

pub fn render_toolbar(frame: &mut Frame, area: Rect, page: &PageView<RowKey>) {
    let mut spans = vec![
        Span::styled(" search: ", Styles::dim()),
        Span::raw(if page.query.is_empty() {
            "-".to_string()
        } else {
            page.query.clone()
        }),
        Span::styled("  category: ", Styles::dim()),
        Span::styled(page.category.clone(), Styles::key()),
    ];
    if let Some(label) = &page.sort_label {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label.clone(), Styles::key()));
        spans.push(Span::styled(" (x clears)", Styles::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
