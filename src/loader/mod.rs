//! Loader for the two dashboard resources.
//!
//! This module defines the `DataSource` trait so the dashboard can be fed
//! either by the live backend (`HttpSource`) or by in-memory fixtures
//! (`MockSource`). `load` always fetches jobs first and analysis second.

mod http;
pub mod mock;

pub use http::{DEFAULT_API_URL, HttpSource};
pub use mock::MockSource;

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::model::{AnalysisSummary, JobRecord};
use crate::view::ViewEvent;

/// Backend endpoints consumed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/jobs`
    Jobs,
    /// `GET /api/analysis`
    Analysis,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Jobs => "/api/jobs",
            Endpoint::Analysis => "/api/analysis",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors that can occur while loading one of the endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Connection refused, DNS failure, timeout, truncated body.
    Transport { endpoint: Endpoint, message: String },
    /// The server answered with a non-2xx status.
    Status { endpoint: Endpoint, status: u16 },
    /// The body is not valid JSON or does not match the expected shape.
    Decode { endpoint: Endpoint, message: String },
}

impl LoadError {
    /// Endpoint whose request failed.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            LoadError::Transport { endpoint, .. }
            | LoadError::Status { endpoint, .. }
            | LoadError::Decode { endpoint, .. } => *endpoint,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport { endpoint, message } => {
                write!(f, "{}: request failed: {}", endpoint, message)
            }
            LoadError::Status { endpoint, status } => {
                write!(f, "{}: server returned HTTP {}", endpoint, status)
            }
            LoadError::Decode { endpoint, message } => {
                write!(f, "{}: malformed response: {}", endpoint, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Abstraction over where the dashboard data comes from.
pub trait DataSource: Send + Sync {
    /// Fetches the list of scraped job postings.
    fn fetch_jobs(&self) -> Result<Vec<JobRecord>, LoadError>;

    /// Fetches the precomputed analysis summary.
    fn fetch_analysis(&self) -> Result<AnalysisSummary, LoadError>;

    /// Short human-readable description (shown in the header).
    fn describe(&self) -> String;
}

/// Both payloads of one successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedData {
    pub jobs: Vec<JobRecord>,
    pub analysis: AnalysisSummary,
    /// Unix timestamp (seconds) at which the load completed.
    pub loaded_at: i64,
}

/// Fetches jobs, then analysis. The analysis request is not issued if the
/// jobs request fails.
pub fn load(source: &dyn DataSource) -> Result<LoadedData, LoadError> {
    debug!("Fetching {} from {}", Endpoint::Jobs, source.describe());
    let jobs = source.fetch_jobs()?;
    debug!("Fetched {} jobs", jobs.len());

    debug!("Fetching {} from {}", Endpoint::Analysis, source.describe());
    let analysis = source.fetch_analysis()?;
    debug!(
        "Fetched analysis: {} titles, {} companies",
        analysis.top_titles.len(),
        analysis.top_companies.len()
    );

    Ok(LoadedData {
        jobs,
        analysis,
        loaded_at: chrono::Utc::now().timestamp(),
    })
}

/// Runs `load` on a worker thread and hands the outcome to `notify`,
/// tagged with `session`.
///
/// There is no cancellation: a superseded worker still finishes, and the
/// receiver decides whether the result is still wanted.
pub fn spawn_load<F>(source: Arc<dyn DataSource>, session: u64, notify: F) -> JoinHandle<()>
where
    F: FnOnce(ViewEvent) + Send + 'static,
{
    thread::spawn(move || {
        info!("Load #{} started ({})", session, source.describe());
        let result = load(source.as_ref());
        match &result {
            Ok(data) => info!("Load #{} finished: {} jobs", session, data.jobs.len()),
            Err(e) => warn!("Load #{} failed: {}", session, e),
        }
        notify(ViewEvent::LoadFinished { session, result });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn load_fetches_jobs_before_analysis() {
        let source = MockSource::sample();
        let data = load(&source).unwrap();
        assert!(!data.jobs.is_empty());
        assert_eq!(source.calls(), vec![Endpoint::Jobs, Endpoint::Analysis]);
    }

    #[test]
    fn load_skips_analysis_when_jobs_fail() {
        let source = MockSource::sample().with_jobs_error(LoadError::Status {
            endpoint: Endpoint::Jobs,
            status: 500,
        });
        let err = load(&source).unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Jobs);
        assert_eq!(source.calls(), vec![Endpoint::Jobs]);
    }

    #[test]
    fn load_reports_analysis_failure_after_jobs_succeed() {
        let source = MockSource::sample().with_analysis_error(LoadError::Transport {
            endpoint: Endpoint::Analysis,
            message: "connection refused".to_string(),
        });
        let err = load(&source).unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Analysis);
        assert_eq!(source.calls(), vec![Endpoint::Jobs, Endpoint::Analysis]);
    }

    #[test]
    fn spawn_load_tags_result_with_session() {
        let (tx, rx) = mpsc::channel();
        let source: Arc<dyn DataSource> = Arc::new(MockSource::sample());
        let handle = spawn_load(source, 7, move |event| {
            let _ = tx.send(event);
        });
        handle.join().unwrap();

        match rx.recv().unwrap() {
            ViewEvent::LoadFinished { session, result } => {
                assert_eq!(session, 7);
                assert!(result.is_ok());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn spawn_load_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel::<ViewEvent>();
        drop(rx);
        let source: Arc<dyn DataSource> = Arc::new(MockSource::sample());
        let handle = spawn_load(source, 1, move |event| {
            assert!(tx.send(event).is_err());
        });
        handle.join().unwrap();
    }

    #[test]
    fn load_error_display_names_endpoint() {
        let err = LoadError::Status {
            endpoint: Endpoint::Analysis,
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/analysis: server returned HTTP 503");
    }
}
