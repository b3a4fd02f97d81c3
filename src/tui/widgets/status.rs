//! Loading and failure panels shown in place of the dashboard.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::loader::LoadError;
use crate::tui::style::Styles;

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).style(Styles::default());
    let paragraph = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_failed(frame: &mut Frame, area: Rect, error: &LoadError) {
    let block = Block::default()
        .title(" Load failed ")
        .borders(Borders::ALL)
        .border_style(Styles::critical());

    let lines = vec![
        Line::from(Span::styled(
            format!("Could not load {}", error.endpoint()),
            Styles::critical(),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Styles::help()),
            Span::styled("r", Styles::help_key()),
            Span::styled(" to retry, ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" to quit", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
