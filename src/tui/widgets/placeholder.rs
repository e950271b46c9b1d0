//! Placeholder and Not Found pages.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::router::PageKind;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

pub fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState) {
    let page = &state.page;
    let mut lines = vec![
        Line::from(Span::styled(page.title, Styles::title())),
        Line::from(""),
        Line::from(Span::styled(page.subtitle, Styles::dim())),
    ];
    if page.kind == PageKind::NotFound {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Path: {}", page.path),
            Styles::dim(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Styles::default());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
