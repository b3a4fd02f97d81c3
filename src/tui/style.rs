//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const HIGHLIGHT_WARNING: Color = Color::Yellow;
    pub const HIGHLIGHT_CRITICAL: Color = Color::Red;
    pub const LINK: Color = Color::Cyan;

    // Bar colors, one per chart
    pub const TITLES_BAR: Color = Color::Rgb(0x88, 0x84, 0xd8);
    pub const COMPANIES_BAR: Color = Color::Rgb(0x82, 0xca, 0x9d);
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning style (yellow).
    pub fn warning() -> Style {
        Style::default().fg(Theme::HIGHLIGHT_WARNING)
    }

    /// Critical value style (red).
    pub fn critical() -> Style {
        Style::default()
            .fg(Theme::HIGHLIGHT_CRITICAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Hyperlink cell style.
    pub fn link() -> Style {
        Style::default()
            .fg(Theme::LINK)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Section header style for popups.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Bar style for the top-titles chart.
    pub fn titles_bar() -> Style {
        Style::default().fg(Theme::TITLES_BAR)
    }

    /// Bar style for the top-companies chart.
    pub fn companies_bar() -> Style {
        Style::default().fg(Theme::COMPANIES_BAR)
    }
}
