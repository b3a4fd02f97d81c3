//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::view::ViewPhase;
use crate::view::dashboard::build_dashboard;

use super::state::{AppState, PopupState};
use super::style::Styles;
use super::widgets::{
    render_chart, render_failed, render_header, render_help, render_jobs, render_loading,
    render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    match state.view.phase.clone() {
        ViewPhase::Loading => render_loading(frame, chunks[1]),
        ViewPhase::Failed(e) => render_failed(frame, chunks[1], &e),
        ViewPhase::Ready => render_dashboard(frame, chunks[1], state),
    }

    render_footer(frame, chunks[2], state);

    // Popups are rendered last to overlay everything
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}

/// Job table on top, the two charts side by side below.
fn render_dashboard(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.clamp_selection();
    let Some(view) = build_dashboard(&state.view, state.filter.as_deref()) else {
        return;
    };

    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    render_jobs(frame, rows[0], state, &view.jobs);

    let charts = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_chart(frame, charts[0], &view.top_titles, Styles::titles_bar());
    render_chart(frame, charts[1], &view.top_companies, Styles::companies_bar());
}

/// Key hints, plus the link target of the selected job.
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit  ", Styles::help()),
        Span::styled("r", Styles::help_key()),
        Span::styled(" reload  ", Styles::help()),
        Span::styled("/", Styles::help_key()),
        Span::styled(" filter  ", Styles::help()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" open  ", Styles::help()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" help", Styles::help()),
    ];
    if let Some(job) = state.selected_job() {
        spans.push(Span::styled("  → ", Styles::help()));
        spans.push(Span::styled(job.url.clone(), Styles::link()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
