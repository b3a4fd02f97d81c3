//! In-memory data source for tests and `--demo` mode.

use std::sync::Mutex;

use crate::model::{AnalysisSummary, JobRecord, LabelCounts};

use super::{DataSource, Endpoint, LoadError};

/// Fixture-backed `DataSource` with scripted per-endpoint failures.
///
/// Records the order in which endpoints were requested.
pub struct MockSource {
    jobs: Result<Vec<JobRecord>, LoadError>,
    analysis: Result<AnalysisSummary, LoadError>,
    calls: Mutex<Vec<Endpoint>>,
}

impl MockSource {
    pub fn new(jobs: Vec<JobRecord>, analysis: AnalysisSummary) -> Self {
        Self {
            jobs: Ok(jobs),
            analysis: Ok(analysis),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A small but realistic scrape result.
    pub fn sample() -> Self {
        let jobs = [
            ("Data Scientist", "ABC Corp", "https://jobs.example.com/abc/data-scientist"),
            ("Software Engineer", "XYZ Inc", "https://jobs.example.com/xyz/software-engineer"),
            ("Software Engineer", "ABC Corp", "https://jobs.example.com/abc/software-engineer"),
            ("Data Analyst", "Globex", "https://jobs.example.com/globex/data-analyst"),
            ("ML Engineer", "Initech", "https://jobs.example.com/initech/ml-engineer"),
            ("Software Engineer", "Globex", "https://jobs.example.com/globex/software-engineer"),
        ]
        .into_iter()
        .map(|(title, company, url)| JobRecord {
            title: title.to_string(),
            company: company.to_string(),
            url: url.to_string(),
        })
        .collect();

        let analysis = AnalysisSummary {
            top_titles: LabelCounts::from_iter([
                ("Software Engineer", 3),
                ("Data Scientist", 1),
                ("Data Analyst", 1),
                ("ML Engineer", 1),
            ]),
            top_companies: LabelCounts::from_iter([
                ("ABC Corp", 2),
                ("Globex", 2),
                ("XYZ Inc", 1),
                ("Initech", 1),
            ]),
        };

        Self::new(jobs, analysis)
    }

    pub fn with_jobs_error(mut self, error: LoadError) -> Self {
        self.jobs = Err(error);
        self
    }

    pub fn with_analysis_error(mut self, error: LoadError) -> Self {
        self.analysis = Err(error);
        self
    }

    /// Endpoints requested so far, in order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, endpoint: Endpoint) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(endpoint);
        }
    }
}

impl DataSource for MockSource {
    fn fetch_jobs(&self) -> Result<Vec<JobRecord>, LoadError> {
        self.record(Endpoint::Jobs);
        self.jobs.clone()
    }

    fn fetch_analysis(&self) -> Result<AnalysisSummary, LoadError> {
        self.record(Endpoint::Analysis);
        self.analysis.clone()
    }

    fn describe(&self) -> String {
        "demo data".to_string()
    }
}
