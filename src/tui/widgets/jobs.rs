//! Job listings table.
//! Thin TUI wrapper over [`crate::view::dashboard::JobTableView`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::dashboard::JobTableView;

pub fn render_jobs(frame: &mut Frame, area: Rect, state: &mut AppState, view: &JobTableView) {
    let title = match &state.filter {
        Some(f) => format!(
            " {} ({} of {}, filter: {}) ",
            view.title,
            view.rows.len(),
            state.view.jobs.len(),
            f
        ),
        None => format!(" {} ({}) ", view.title, view.rows.len()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());

    if view.rows.is_empty() {
        let message = if state.filter.is_some() {
            "No jobs match the filter"
        } else {
            "No jobs"
        };
        frame.render_widget(Paragraph::new(message).style(Styles::dim()).block(block), area);
        return;
    }

    let header = Row::new(
        view.headers
            .iter()
            .map(|h| Span::styled(*h, Styles::table_header())),
    )
    .style(Styles::table_header())
    .height(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.title.clone()),
                Cell::from(row.company.clone()),
                Cell::from(Span::styled(row.link_label, Styles::link())),
            ])
            .height(1)
        })
        .collect();

    let constraints = [
        Constraint::Percentage(55),
        Constraint::Percentage(35),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    state.table_state.select(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut state.table_state);
}
