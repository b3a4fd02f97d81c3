//! Help popup widget with keybindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("↑/k ↓/j", "move selection in the job table"),
    ("PgUp PgDn", "move selection by a page"),
    ("Home/g End/G", "first / last job"),
    ("Enter/o", "open the selected job link in the browser"),
    ("/", "filter jobs by title or company"),
    ("r", "reload jobs and analysis"),
    ("?/F1", "toggle this help"),
    ("q", "quit (asks for confirmation)"),
    ("Ctrl-C", "quit immediately"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 24);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" jobscope Help ")
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
        Span::styled(", ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Keys", Styles::section_header())),
        Line::from(""),
    ];
    for (keys, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Styles::help_key()),
            Span::styled(*action, Styles::help()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Charts", Styles::section_header())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Bars are shown in the order the backend ranked them.",
        Styles::help(),
    )));
    lines.push(Line::from(Span::styled(
        "Data is fetched fresh on start-up and on every reload.",
        Styles::help(),
    )));
    lines
}
