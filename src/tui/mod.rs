//! Terminal User Interface for the jobscope dashboard.
//!
//! Shows a loading indicator until both endpoints have answered, then the
//! job table with the top-titles and top-companies bar charts.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::AppState;
