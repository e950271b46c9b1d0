//! Sidebar navigation menu.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::router::MENU;
use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the sidebar. Section headers are drawn above their items; the
/// highlighted entry follows the menu cursor while navigating and the open
/// page otherwise.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let navigating = state.input_mode == InputMode::Navigation;
    let highlighted = state.menu.get(state.menu_cursor).map(|e| e.path);

    let mut lines: Vec<Line> = Vec::new();
    let mut entries = state.menu.iter().peekable();
    for section in MENU {
        if !section.items.is_empty() {
            lines.push(Line::from(Span::styled(section.label, Styles::section_header())));
        }
        while let Some(entry) = entries.next_if(|e| {
            e.label == section.label || section.items.contains(&e.label)
        }) {
            let indent = if entry.nested { "  " } else { "" };
            let style = if Some(entry.path) == highlighted && navigating {
                Styles::selected()
            } else if entry.path == state.page.path {
                Styles::title()
            } else {
                Styles::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", indent, entry.label),
                style,
            )));
        }
    }

    let title = if navigating { " Menu (Enter) " } else { " Menu (n) " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if navigating {
            Styles::title()
        } else {
            Styles::dim()
        });
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
