//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `InteractionMode`: Whether keys navigate or edit the search query
//!
//! State changes only at four points: a load completes, the search query is
//! edited, the view is toggled, or a reload is requested. Everything shown on
//! screen is derived from this state on each render.

use chrono::{DateTime, Local};

use super::input::TextInput;
use crate::domain::{ChartPoint, LoadOutcome, ToolRecord};
use crate::normalize::characteristic_counts;
use crate::selector::{Presentation, StatusLine, ViewMode, filter_records, present};

/// The primary application state.
#[derive(Debug)]
pub struct AppState {
    // View state
    /// Cards or table
    pub view_mode: ViewMode,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Search box contents
    pub search: TextInput,
    /// First visible row of the record area
    pub scroll: usize,

    // Data state
    /// Where records are loaded from
    pub source: String,
    /// Records from the last load (or the fallback list)
    records: Vec<ToolRecord>,
    /// Failure message from the last load
    load_error: Option<String>,
    /// Whether a load is in flight
    loading: bool,
    /// When the last load finished
    loaded_at: Option<DateTime<Local>>,

    // Control flags
    /// Reload requested; consumed by the runner
    pub reload_requested: bool,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Initial state before the first load finishes.
    ///
    /// The fallback list is shown until the load completes.
    pub fn new(source: impl Into<String>, fallback: Vec<ToolRecord>) -> Self {
        Self {
            view_mode: ViewMode::default(),
            interaction_mode: InteractionMode::default(),
            search: TextInput::new(),
            scroll: 0,
            source: source.into(),
            records: fallback,
            load_error: None,
            loading: true,
            loaded_at: None,
            reload_requested: false,
            should_quit: false,
        }
    }

    /// Replace the record list with a finished load, in one step.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        let (records, error) = outcome.into_parts();
        self.records = records;
        self.load_error = error;
        self.loading = false;
        self.loaded_at = Some(Local::now());
        self.scroll = 0;
    }

    /// Return to the initial state for a fresh load cycle.
    ///
    /// A reload starts over completely: query, view mode, and scroll reset,
    /// and the fallback list stands in until the new load lands.
    pub fn restart(&mut self, fallback: Vec<ToolRecord>) {
        let source = std::mem::take(&mut self.source);
        *self = Self::new(source, fallback);
    }

    /// All loaded records
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    /// Failure message from the last load
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether a load is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// When the last load finished
    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// Raw search query
    pub fn query(&self) -> &str {
        self.search.content()
    }

    /// Records matching the current query
    pub fn visible(&self) -> Vec<&ToolRecord> {
        filter_records(&self.records, self.query())
    }

    /// Chart data for the visible records
    pub fn chart(&self) -> Vec<ChartPoint> {
        characteristic_counts(self.visible())
    }

    /// Display model for the record area
    pub fn presentation(&self) -> Presentation {
        present(&self.visible(), self.view_mode)
    }

    /// Badges for the status line
    pub fn status_line(&self) -> StatusLine {
        StatusLine::new(self.visible().len(), self.query(), self.load_error())
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Keys navigate
    #[default]
    Normal,
    /// Keys edit the search query
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("Leonardo.AI", "Feature rich platform. Very limited free credits."),
            ToolRecord::new("Gemini", "Fastest outputs. Generally lower quality."),
        ]
    }

    #[test]
    fn test_app_state_initial() {
        let state = AppState::new("./image_models_data.json", vec![]);
        assert_eq!(state.view_mode, ViewMode::Cards);
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert!(state.loaded_at().is_none());
        assert!(!state.should_quit);
        assert_eq!(state.presentation(), Presentation::NoResults);
    }

    #[test]
    fn test_apply_load_success() {
        let mut state = AppState::new("src", vec![]);
        state.scroll = 4;
        state.apply_load(LoadOutcome::Loaded(records()));
        assert!(!state.is_loading());
        assert!(state.load_error().is_none());
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.scroll, 0);
        assert!(state.loaded_at().is_some());
    }

    #[test]
    fn test_apply_load_fallback_replaces_wholesale() {
        let mut state = AppState::new("src", vec![]);
        state.apply_load(LoadOutcome::Loaded(records()));
        state.apply_load(LoadOutcome::Fallback {
            records: vec![],
            reason: "Failed to fetch data: 404".to_string(),
        });
        assert!(state.records().is_empty());
        assert_eq!(state.load_error(), Some("Failed to fetch data: 404"));
        assert!(state.status_line().offline);
    }

    #[test]
    fn test_visible_and_chart_follow_query() {
        let mut state = AppState::new("src", vec![]);
        state.apply_load(LoadOutcome::Loaded(records()));
        assert_eq!(
            state.chart(),
            vec![ChartPoint::new("Leonardo.AI", 1), ChartPoint::new("Gemini", 1)]
        );

        state.search = TextInput::with_content("fastest");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].tool(), "Gemini");
        assert_eq!(state.chart(), vec![ChartPoint::new("Gemini", 1)]);
        assert!(state.status_line().filtered);
    }

    #[test]
    fn test_restart_resets_everything_but_source() {
        let mut state = AppState::new("https://example.com/data.json", vec![]);
        state.apply_load(LoadOutcome::Loaded(records()));
        state.view_mode = ViewMode::Table;
        state.search = TextInput::with_content("gem");
        state.interaction_mode = InteractionMode::Search;
        state.reload_requested = true;

        let fallback = vec![ToolRecord::new("Offline", "")];
        state.restart(fallback.clone());

        assert_eq!(state.source, "https://example.com/data.json");
        assert_eq!(state.view_mode, ViewMode::Cards);
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert_eq!(state.query(), "");
        assert!(state.is_loading());
        assert!(!state.reload_requested);
        assert_eq!(state.records(), fallback.as_slice());
    }
}
