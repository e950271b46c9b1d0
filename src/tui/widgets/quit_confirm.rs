//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::popup::centered_fixed;
use crate::tui::style::Styles;

/// Renders the quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_area = centered_fixed(36, 5, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit seodesk ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = vec![
        Line::from("Quit the dashboard?"),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled("/", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" quit  ", Styles::help()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" stay", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup_area);
}
