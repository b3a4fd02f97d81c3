//! jobscope - terminal dashboard for a job-market scraper backend.
//!
//! This library provides:
//! - `model` - wire types for `/api/jobs` and `/api/analysis`
//! - `loader` - data sources and the jobs-then-analysis load sequence
//! - `view` - view state, its transitions, and UI-agnostic view models
//! - `tui` - interactive terminal frontend
//! - `logging` - tracing subscriber set-up for the binary

pub mod loader;
pub mod logging;
pub mod model;
pub mod tui;
pub mod view;
