//! Article table page: status tabs, search, sort summary, table, pagination.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::fmt::{format_thousands, plural_suffix};
use crate::model::{ArticleRow, SortField};
use crate::table::SortSpec;
use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

const HEADERS: &[&str] = &["Article Title", "Keyword [Traffic]", "Words", "Created On", "Status"];
const SKELETON: &str = "░░░░░░░░";

pub fn render_articles(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Tabs
        Constraint::Length(1), // Search
        Constraint::Length(1), // Filter, selection and sort summary
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Pagination
    ])
    .split(area);

    render_tabs(frame, chunks[0], state);
    render_search(frame, chunks[1], state);
    render_summary(frame, chunks[2], state);
    render_table(frame, chunks[3], state);
    render_pagination(frame, chunks[4], state);
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.label()), style));
        spans.push(Span::raw(" "));
    }
    let all_style = if state.current_tab == Tab::All {
        Styles::tab_active()
    } else {
        Styles::tab_inactive()
    };
    spans.push(Span::styled(" 0 All ", all_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled("Search: ", Styles::title()),
            Span::styled(format!("{}_", state.search_input), Styles::search_input()),
            Span::styled("  (Enter keep, Esc clear)", Styles::dim()),
        ])
    } else if !state.table.search().is_empty() {
        Line::from(vec![
            Span::styled("Search: ", Styles::title()),
            Span::styled(state.table.search().to_string(), Styles::default()),
            Span::styled("  (/ edit)", Styles::dim()),
        ])
    } else {
        Line::from(Span::styled(
            "Search for Title & Keywords (/)",
            Styles::dim(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let table = &state.table;
    let sort = table.sort();
    let sort_text = match sort.field {
        Some(field) => format!("{} {}", field.name(), sort.direction.arrow()),
        None => "none (t traffic, w words)".to_string(),
    };
    let line = Line::from(vec![
        Span::styled("Filter: ", Styles::dim()),
        Span::raw(state.filter_label()),
        Span::styled(" | Selected: ", Styles::dim()),
        Span::raw(table.selected_count().to_string()),
        Span::styled(" | Sort: ", Styles::dim()),
        Span::raw(sort_text),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn sort_indicator(sort: SortSpec<SortField>, field: SortField) -> &'static str {
    if sort.field == Some(field) {
        sort.direction.arrow()
    } else {
        ""
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn article_cells(row: &ArticleRow, selected: bool) -> Vec<Span<'static>> {
    vec![
        Span::raw(checkbox(selected)),
        Span::raw(row.title.clone()),
        Span::raw(format!(
            "{} [{}]",
            row.keyword,
            format_thousands(row.traffic)
        )),
        Span::raw(format_thousands(row.words)),
        Span::raw(row.created_on.clone()),
        Span::styled(row.status.name(), Styles::status(row.status)),
    ]
}

fn render_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.current_tab.label()))
        .borders(Borders::ALL)
        .style(Styles::default());

    let loading = state.table.is_loading();
    if !loading && state.table.total() == 0 {
        state.resolve_cursor();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new("No articles match the current filters").block(block),
            area,
        );
        return;
    }

    // Header with sort indicators on the numeric columns
    let sort = state.table.sort();
    let mut headers = vec![Span::styled(
        checkbox(!loading && state.table.all_visible_selected()),
        Styles::table_header(),
    )];
    headers.extend(HEADERS.iter().map(|h| {
        let indicator = match *h {
            "Keyword [Traffic]" => sort_indicator(sort, SortField::Traffic),
            "Words" => sort_indicator(sort, SortField::Words),
            _ => "",
        };
        Span::styled(format!("{}{}", h, indicator), Styles::table_header())
    }));
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = if loading {
        // Border and header take three lines.
        let count = state
            .table
            .page_size()
            .min(area.height.saturating_sub(3) as usize);
        (0..count)
            .map(|_| {
                Row::new(vec![Span::raw("   ")].into_iter().chain(
                    HEADERS.iter().map(|_| Span::styled(SKELETON, Styles::skeleton())),
                ))
            })
            .collect()
    } else {
        state
            .table
            .visible_rows()
            .map(|row| {
                let cells = article_cells(row, state.table.is_selected(row.id));
                Row::new(cells).height(1)
            })
            .collect()
    };

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(30),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    if loading {
        state.ratatui_state.select(None);
    } else {
        state.resolve_cursor();
    }
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, &mut state.ratatui_state);
}

fn render_pagination(frame: &mut Frame, area: Rect, state: &AppState) {
    let table = &state.table;
    let total = table.total();
    let line = Line::from(vec![
        Span::styled(
            format!("Total {} Article Title{}", total, plural_suffix(total)),
            Styles::default(),
        ),
        Span::styled(" | ", Styles::dim()),
        Span::raw(format!("Show {} entries per page", table.page_size())),
        Span::styled(" (p)", Styles::dim()),
        Span::styled(" | ", Styles::dim()),
        Span::raw(format!("{}/{}", table.current_page(), table.page_count())),
        Span::styled(" ([ ])", Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
