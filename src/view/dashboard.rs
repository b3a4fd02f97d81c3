//! Dashboard view models: the job table and the two bar charts.

use serde::Serialize;

use crate::model::{ChartEntry, JobRecord};

use super::ViewState;

/// Label of the link cell in every job row.
pub const LINK_LABEL: &str = "View";

/// One job table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRow {
    /// Position in the API response.
    pub index: usize,
    pub title: String,
    pub company: String,
    pub link_label: &'static str,
    /// Link target, opened in a new browser window.
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobTableView {
    pub title: &'static str,
    pub headers: [&'static str; 3],
    pub rows: Vec<JobRow>,
}

/// Horizontal bar chart: `name` on the category axis, `count` on the value axis.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub title: &'static str,
    pub entries: Vec<ChartEntry>,
}

impl ChartView {
    /// Largest count, used to scale bars.
    pub fn max_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub jobs: JobTableView,
    pub top_titles: ChartView,
    pub top_companies: ChartView,
}

/// Builds the job table, keeping response order. `filter` narrows rows to
/// those whose title or company contains it (case-insensitive).
pub fn build_job_table(jobs: &[JobRecord], filter: Option<&str>) -> JobTableView {
    let rows = jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| filter.map(|f| job.matches_filter(f)).unwrap_or(true))
        .map(|(index, job)| JobRow {
            index,
            title: job.title.clone(),
            company: job.company.clone(),
            link_label: LINK_LABEL,
            url: job.url.clone(),
        })
        .collect();

    JobTableView {
        title: "Job Listings",
        headers: ["Title", "Company", "Link"],
        rows,
    }
}

/// Builds the full dashboard. Returns `None` unless the state is ready.
pub fn build_dashboard(state: &ViewState, filter: Option<&str>) -> Option<DashboardView> {
    if !state.is_ready() {
        return None;
    }
    Some(DashboardView {
        jobs: build_job_table(&state.jobs, filter),
        top_titles: ChartView {
            title: "Top Job Titles",
            entries: state.title_entries(),
        },
        top_companies: ChartView {
            title: "Top Companies",
            entries: state.company_entries(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadedData, MockSource, load};
    use crate::model::{AnalysisSummary, LabelCounts};
    use crate::view::ViewEvent;

    fn job(title: &str, company: &str, url: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: company.to_string(),
            url: url.to_string(),
        }
    }

    fn ready_state(jobs: Vec<JobRecord>, analysis: AnalysisSummary) -> ViewState {
        let mut state = ViewState::new();
        state.apply(ViewEvent::LoadStarted { session: 1 });
        state.apply(ViewEvent::LoadFinished {
            session: 1,
            result: Ok(LoadedData {
                jobs,
                analysis,
                loaded_at: 0,
            }),
        });
        state
    }

    #[test]
    fn single_job_renders_one_row_with_link() {
        let table = build_job_table(&[job("X", "Y", "http://a")], None);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].link_label, "View");
        assert_eq!(table.rows[0].url, "http://a");
        assert_eq!(table.headers, ["Title", "Company", "Link"]);
    }

    #[test]
    fn filter_keeps_original_index() {
        let jobs = vec![
            job("Data Scientist", "ABC Corp", "http://a"),
            job("Software Engineer", "XYZ Inc", "http://b"),
        ];
        let table = build_job_table(&jobs, Some("xyz"));
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].index, 1);
    }

    #[test]
    fn dashboard_requires_ready_state() {
        assert!(build_dashboard(&ViewState::new(), None).is_none());
    }

    #[test]
    fn dashboard_with_empty_titles_has_zero_bars() {
        let analysis = AnalysisSummary {
            top_titles: LabelCounts::new(),
            top_companies: LabelCounts::from_iter([("ABC Corp", 2)]),
        };
        let view = build_dashboard(&ready_state(Vec::new(), analysis), None).unwrap();
        assert!(view.top_titles.entries.is_empty());
        assert_eq!(view.top_titles.max_count(), 0);
        assert_eq!(view.top_companies.max_count(), 2);
    }

    #[test]
    fn dashboard_from_sample_source() {
        let data = load(&MockSource::sample()).unwrap();
        let view = build_dashboard(&ready_state(data.jobs, data.analysis), None).unwrap();
        assert_eq!(view.jobs.rows.len(), 6);
        assert_eq!(view.top_titles.entries[0].name, "Software Engineer");
        assert_eq!(view.top_titles.entries[0].count, 3);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["top_companies"]["title"], "Top Companies");
        assert_eq!(json["jobs"]["rows"][0]["link_label"], "View");
    }
}
