//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::actions::NoticeKind;
use crate::model::ArticleStatus;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::Gray;

    // Dialog accents
    pub const CONFIRM: Color = Color::Green;
    pub const WARNING: Color = Color::Rgb(249, 115, 22);
    pub const INFO: Color = Color::Rgb(37, 99, 235);
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

    /// Cursor row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Search input style.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Status message in the bottom line.
    pub fn status_message() -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Page and popup titles.
    pub fn title() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Sidebar section header.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Skeleton placeholder cells while loading.
    pub fn skeleton() -> Style {
        Style::default()
            .fg(Theme::FG_DIM)
            .add_modifier(Modifier::DIM)
    }

    /// Status badge color.
    pub fn status(status: ArticleStatus) -> Style {
        let color = match status {
            ArticleStatus::Generated => Color::Cyan,
            ArticleStatus::Published => Color::Green,
            ArticleStatus::Scheduled => Color::Yellow,
            ArticleStatus::Archived => Color::DarkGray,
        };
        Style::default().fg(color)
    }

    /// Border color of a notice popup.
    pub fn notice(kind: NoticeKind) -> Style {
        let color = match kind {
            NoticeKind::Info => Theme::INFO,
            NoticeKind::Success => Theme::CONFIRM,
            NoticeKind::Warning => Theme::WARNING,
        };
        Style::default().fg(color)
    }

    /// Border color of a confirmation popup.
    pub fn prompt(destructive: bool) -> Style {
        if destructive {
            Style::default().fg(Theme::WARNING)
        } else {
            Style::default().fg(Theme::CONFIRM)
        }
    }
}
