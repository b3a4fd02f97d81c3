//! TUI widgets for jobscope.

mod chart;
mod header;
mod help;
mod jobs;
mod quit_confirm;
mod status;

pub use chart::render_chart;
pub use header::render_header;
pub use help::render_help;
pub use jobs::render_jobs;
pub use quit_confirm::render_quit_confirm;
pub use status::{render_failed, render_loading};
