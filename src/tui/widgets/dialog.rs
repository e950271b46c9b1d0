//! Action confirmation and notice popups.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::popup::centered_fixed;
use crate::actions::{Notice, NoticeKind, Prompt};
use crate::tui::style::Styles;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 8;

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "i",
        NoticeKind::Success => "✓",
        NoticeKind::Warning => "!",
    }
}

fn render_dialog(frame: &mut Frame, area: Rect, title: String, border: Style, lines: Vec<Line>) {
    let popup_area = centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Renders a yes/no prompt.
pub fn render_confirm(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let lines = vec![
        Line::from(""),
        Line::from(prompt.text.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter/y] ", Styles::help_key()),
            Span::styled(prompt.confirm_label, Styles::prompt(prompt.destructive)),
            Span::raw("   "),
            Span::styled("[Esc/n] ", Styles::help_key()),
            Span::styled(prompt.cancel_label, Styles::help()),
        ]),
    ];
    render_dialog(
        frame,
        area,
        format!(" ? {} ", prompt.title),
        Styles::prompt(prompt.destructive),
        lines,
    );
}

/// Renders a notice with a single dismiss button.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let lines = vec![
        Line::from(""),
        Line::from(notice.text.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", Styles::help_key()),
            Span::styled(notice.dismiss_label, Styles::notice(notice.kind)),
        ]),
    ];
    render_dialog(
        frame,
        area,
        format!(" {} {} ", icon(notice.kind), notice.title),
        Styles::notice(notice.kind),
        lines,
    );
}
