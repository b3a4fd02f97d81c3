//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::model::JobRecord;
use crate::view::ViewState;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Terminal-side state wrapped around the UI-agnostic [`ViewState`].
#[derive(Debug)]
pub struct AppState {
    /// Loaded data and load phase.
    pub view: ViewState,
    /// Description of the data source (base URL or "demo data").
    pub source_label: String,
    pub input_mode: InputMode,
    /// Filter being typed.
    pub filter_input: String,
    /// Applied job table filter.
    pub filter: Option<String>,
    /// Selected row in the filtered job table.
    pub selected: usize,
    pub popup: PopupState,
    /// Transient message shown in the header until the next key press.
    pub status_message: Option<String>,
    pub table_state: RatatuiTableState,
}

impl AppState {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            view: ViewState::new(),
            source_label: source_label.into(),
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            filter: None,
            selected: 0,
            popup: PopupState::None,
            status_message: None,
            table_state: RatatuiTableState::default(),
        }
    }

    /// Jobs visible under the current filter, with their response index.
    pub fn visible_jobs(&self) -> Vec<(usize, &JobRecord)> {
        self.view
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, job)| {
                self.filter
                    .as_deref()
                    .map(|f| job.matches_filter(f))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Selected job, if the table is shown and non-empty.
    pub fn selected_job(&self) -> Option<&JobRecord> {
        if !self.view.is_ready() {
            return None;
        }
        self.visible_jobs().get(self.selected).map(|(_, job)| *job)
    }

    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.selected = 0;
    }

    /// Moves selection up.
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves selection down.
    pub fn select_down(&mut self) {
        let max = self.visible_jobs().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    /// Moves selection up by a page.
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    /// Moves selection down by a page.
    pub fn page_down(&mut self, page_size: usize) {
        let max = self.visible_jobs().len().saturating_sub(1);
        self.selected = (self.selected + page_size).min(max);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_jobs().len().saturating_sub(1);
    }

    /// Clamps selection after the job list changed.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_jobs().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadedData, MockSource, load};
    use crate::view::ViewEvent;

    fn ready_state() -> AppState {
        let mut state = AppState::new("demo data");
        let LoadedData { jobs, analysis, .. } = load(&MockSource::sample()).unwrap();
        state.view.apply(ViewEvent::LoadStarted { session: 1 });
        state.view.apply(ViewEvent::LoadFinished {
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
    fn no_selection_while_loading() {
        let state = AppState::new("demo data");
        assert!(state.selected_job().is_none());
    }

    #[test]
    fn selection_is_clamped_to_visible_rows() {
        let mut state = ready_state();
        state.select_last();
        assert_eq!(state.selected, 5);
        state.select_down();
        assert_eq!(state.selected, 5);
        state.page_up(10);
        assert_eq!(state.selected, 0);
        state.select_up();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn filter_narrows_rows_and_resets_selection() {
        let mut state = ready_state();
        state.page_down(3);
        state.set_filter(Some("globex".to_string()));
        assert_eq!(state.selected, 0);

        let visible = state.visible_jobs();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0, 3);
        assert_eq!(
            state.selected_job().map(|j| j.title.as_str()),
            Some("Data Analyst")
        );
    }

    #[test]
    fn empty_filter_clears_filter() {
        let mut state = ready_state();
        state.set_filter(Some(String::new()));
        assert!(state.filter.is_none());
        assert_eq!(state.visible_jobs().len(), 6);
    }
}
