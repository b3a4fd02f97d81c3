//! UI-agnostic view state and view models.
//!
//! [`ViewState`] holds what the dashboard has loaded and where it is in the
//! `Loading → Ready | Failed` lifecycle. All changes go through
//! [`ViewState::apply`]. The [`dashboard`] sub-module turns a ready state into
//! table and chart view models that any frontend can render.

pub mod dashboard;

use crate::loader::{LoadError, LoadedData};
use crate::model::{AnalysisSummary, ChartEntry, JobRecord, LabelCounts};

/// Derives bar-chart entries from a label/count mapping.
///
/// One entry per mapping entry, in mapping order.
pub fn derive_chart_entries(mapping: &LabelCounts) -> Vec<ChartEntry> {
    mapping
        .iter()
        .map(|(name, count)| ChartEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Load lifecycle of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Loading,
    Ready,
    Failed(LoadError),
}

/// Inputs to the view-state transition function.
#[derive(Debug)]
pub enum ViewEvent {
    /// A new load session began.
    LoadStarted { session: u64 },
    /// A load session completed.
    LoadFinished {
        session: u64,
        result: Result<LoadedData, LoadError>,
    },
}

/// Everything the dashboard renders from.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub jobs: Vec<JobRecord>,
    pub analysis: AnalysisSummary,
    pub phase: ViewPhase,
    /// Session id of the load whose result is awaited or shown.
    session: u64,
    /// Unix timestamp of the last successful load.
    loaded_at: Option<i64>,
}

impl ViewState {
    /// Initial state: loading, no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event. Returns `false` if the event was ignored because it
    /// belongs to a superseded session.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::LoadStarted { session } => {
                self.session = session;
                self.phase = ViewPhase::Loading;
                true
            }
            ViewEvent::LoadFinished { session, .. } if session != self.session => false,
            ViewEvent::LoadFinished { result, .. } => {
                match result {
                    Ok(data) => {
                        self.jobs = data.jobs;
                        self.analysis = data.analysis;
                        self.loaded_at = Some(data.loaded_at);
                        self.phase = ViewPhase::Ready;
                    }
                    Err(e) => self.phase = ViewPhase::Failed(e),
                }
                true
            }
        }
    }

    /// Session id to use for the next load.
    pub fn next_session(&self) -> u64 {
        self.session + 1
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.phase == ViewPhase::Ready
    }

    pub fn loaded_at(&self) -> Option<i64> {
        self.loaded_at
    }

    /// Chart entries for the top-titles chart.
    pub fn title_entries(&self) -> Vec<ChartEntry> {
        derive_chart_entries(&self.analysis.top_titles)
    }

    /// Chart entries for the top-companies chart.
    pub fn company_entries(&self) -> Vec<ChartEntry> {
        derive_chart_entries(&self.analysis.top_companies)
    }
}
