//! Help popup widget with the key reference.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Renders the help popup centered on screen with scroll support.
/// `scroll` is clamped to the content height.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    // Calculate popup size (60% width, 80% height, clamped to 40-80 x 10-30)
    let popup_width = (area.width * 60 / 100).clamp(40, 80).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 30).min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Yellow)))
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Tabs:"),
        Line::from("1-4      - Generated / Published / Scheduled / Archived"),
        Line::from("0        - All statuses"),
        Line::from("Tab      - Next tab (Shift-Tab: previous)"),
        Line::from(""),
        section("Search:"),
        Line::from("/        - Search title and keyword (case-insensitive)"),
        Line::from("           Enter keeps the term, Esc clears it"),
        Line::from(""),
        section("Sorting:"),
        Line::from("t        - Sort by keyword traffic"),
        Line::from("w        - Sort by word count"),
        Line::from("           Pressing again reverses the direction"),
        Line::from(""),
        section("Rows and pages:"),
        Line::from("j/k      - Move cursor (also Up/Down, Home/End)"),
        Line::from("[ / ]    - Previous / next page (also Left/Right)"),
        Line::from("p        - Cycle entries per page"),
        Line::from("Enter    - Article preview"),
        Line::from(""),
        section("Selection:"),
        Line::from("Space    - Toggle the row under the cursor"),
        Line::from("a        - Toggle every row on the page"),
        Line::from("c        - Clear the selection"),
        Line::from("           Selection survives filtering and paging"),
        Line::from(""),
        section("Actions:"),
        Line::from("P        - Publish the row under the cursor"),
        Line::from("B        - Publish selected articles"),
        Line::from("x        - Archive the row under the cursor"),
        Line::from("X        - Archive selected articles"),
        Line::from(""),
        section("General:"),
        Line::from("n        - Focus the sidebar menu"),
        Line::from("r        - Reload articles"),
        Line::from("?        - Toggle this help"),
        Line::from("q        - Quit"),
    ]
}
