//! Article preview popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::popup::centered_rect;
use crate::fmt::{format_thousands, normalize_for_display};
use crate::model::ArticleRow;
use crate::tui::style::Styles;

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Styles::dim()),
        Span::raw(value),
    ])
}

fn build_content(row: &ArticleRow, selected: bool) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            normalize_for_display(&row.title),
            Styles::title(),
        )),
        Line::from(""),
        field("Keyword", row.keyword.clone()),
        field("Estimated traffic", format_thousands(row.traffic)),
        field("Words", format_thousands(row.words)),
        field("Created on", row.created_on.clone()),
        Line::from(vec![
            Span::styled(format!("{:<18}", "Status"), Styles::dim()),
            Span::styled(row.status.name(), Styles::status(row.status)),
        ]),
        field("Selected", if selected { "yes" } else { "no" }.to_string()),
    ]
}

/// Renders the preview for `row`; a row that disappeared (e.g. after a
/// reload) renders a short message instead.
pub fn render_article_detail(
    frame: &mut Frame,
    area: Rect,
    row: Option<&ArticleRow>,
    selected: bool,
) {
    let popup_area = centered_rect(70, 50, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Article Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let content = match row {
        Some(row) => build_content(row, selected),
        None => vec![Line::from("Article is no longer available")],
    };
    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
