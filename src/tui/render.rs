//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, InputMode, PopupState};
use super::style::Styles;
use super::widgets::{
    render_article_detail, render_articles, render_confirm, render_header, render_help,
    render_notice, render_placeholder, render_quit_confirm, render_sidebar,
};

const SIDEBAR_WIDTH: u16 = 32;

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, body, status line
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(8),    // Sidebar + content
        Constraint::Length(1), // Status line
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    let body = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(chunks[1]);
    render_sidebar(frame, body[0], state);
    render_content(frame, body[1], state);

    render_status_line(frame, chunks[2], state);

    // Popups (rendered last to overlay everything)
    render_popup(frame, area, state);
}

/// Renders the open page.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    if !state.is_articles_page() {
        render_placeholder(frame, area, state);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).split(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(state.page.title, Styles::title()))),
        chunks[0],
    );
    render_articles(frame, chunks[1], state);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status_message {
        Some(msg) => Line::from(Span::styled(msg.clone(), Styles::status_message())),
        None => {
            let hints: &[(&str, &str)] = match state.input_mode {
                InputMode::Search => &[("Enter", "keep"), ("Esc", "clear")],
                InputMode::Navigation => &[("j/k", "move"), ("Enter", "open"), ("Esc", "back")],
                InputMode::Normal => &[
                    ("Space", "select"),
                    ("B", "publish"),
                    ("/", "search"),
                    ("t/w", "sort"),
                    ("n", "menu"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
            };
            let mut spans = Vec::new();
            for (key, label) in hints {
                spans.push(Span::styled(*key, Styles::help_key()));
                spans.push(Span::styled(format!(" {}  ", label), Styles::help()));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_popup(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::ArticleDetail { id } => {
            let id = *id;
            render_article_detail(
                frame,
                area,
                state.table.row(id),
                state.table.is_selected(id),
            );
        }
        PopupState::Confirm { prompt, .. } => render_confirm(frame, area, prompt),
        PopupState::Notice { notice, .. } => render_notice(frame, area, notice),
    }
}
