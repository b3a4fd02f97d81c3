//! Header widget showing time, source, load phase, and status.

use chrono::{DateTime, Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;
use crate::view::ViewPhase;

fn format_local(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----".to_string())
}

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Time
        Constraint::Length(11), // Phase
        Constraint::Min(20),    // Source
        Constraint::Length(42), // Loaded-at / Filter / Status
    ])
    .split(area);

    let time = Paragraph::new(format_local(Local::now().timestamp())).style(Styles::header());
    frame.render_widget(time, chunks[0]);

    let (phase_str, phase_style) = match state.view.phase {
        ViewPhase::Loading => (" LOADING ", Styles::header()),
        ViewPhase::Ready => (" READY ", Styles::header()),
        ViewPhase::Failed(_) => (" FAILED ", Styles::critical()),
    };
    frame.render_widget(Paragraph::new(phase_str).style(phase_style), chunks[1]);

    let source = Paragraph::new(format!(" {}", state.source_label)).style(Styles::header());
    frame.render_widget(source, chunks[2]);

    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::warning())
    } else {
        match state.input_mode {
            InputMode::Filter => (
                format!("Filter: {}█", state.filter_input),
                Styles::filter_input(),
            ),
            InputMode::Normal => {
                let text = if let Some(filter) = &state.filter {
                    format!("/{}", filter)
                } else if let Some(ts) = state.view.loaded_at() {
                    format!("loaded {}", format_local(ts))
                } else {
                    String::new()
                };
                (text, Styles::header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[3]);
}
