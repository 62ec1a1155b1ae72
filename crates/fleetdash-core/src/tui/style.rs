//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::RowStyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::Gray;
    pub const KEY: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Header cell under the column cursor.
    pub fn header_cursor() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Pinned column separator and pinned header cells.
    pub fn pinned() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE).bg(Theme::HEADER_BG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn key() -> Style {
        Style::default().fg(Theme::KEY)
    }

    pub fn critical() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Warning => Style::default().fg(Color::Yellow),
            RowStyleClass::Critical => Self::critical(),
            RowStyleClass::Active => Style::default().fg(Color::Green),
            RowStyleClass::Dimmed => Self::dim(),
            RowStyleClass::Accent => Style::default().fg(Color::Cyan),
            RowStyleClass::Highlight => Style::default().fg(Color::Magenta),
        }
    }
}
