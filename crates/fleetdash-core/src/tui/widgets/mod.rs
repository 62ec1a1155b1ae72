//! TUI widgets.

mod footer;
mod header;
mod help;
mod quit_confirm;
mod summary;
mod table;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use summary::{render_summary, render_toolbar};
pub use table::render_table;

use ratatui::layout::Rect;

/// Rect of `width` x `height` centered in `area`, clamped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
