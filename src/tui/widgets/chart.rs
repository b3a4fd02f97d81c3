//! Horizontal bar chart: category axis shows `name`, value axis `count`.

use ratatui::Frame;
use ratatui::layout::{Direction, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::tui::style::Styles;
use crate::view::dashboard::ChartView;

/// Builds one bar per chart entry, in entry order.
fn bars(view: &ChartView) -> Vec<Bar<'_>> {
    view.entries
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(entry.name.as_str()))
                .value(entry.count)
                .text_value(entry.count.to_string())
        })
        .collect()
}

/// Renders a chart. An empty chart draws its frame with no bars.
pub fn render_chart(frame: &mut Frame, area: Rect, view: &ChartView, bar_style: Style) {
    let title = if view.entries.is_empty() {
        format!(" {} (no data) ", view.title)
    } else {
        format!(" {} ", view.title)
    };

    let bars = bars(view);
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(bar_style)
        .value_style(Styles::default())
        .label_style(Styles::default())
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
