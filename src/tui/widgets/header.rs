//! Header bar widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the one-line header: app name, current page, data source.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(" seodesk ", Styles::header()),
        Span::styled(format!("| {} ", state.page.title), Styles::header()),
        Span::styled(format!("| {} ", state.source), Styles::header()),
    ];
    if state.table.is_loading() {
        spans.push(Span::styled("| loading… ", Styles::header()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::header());
    frame.render_widget(paragraph, area);
}
