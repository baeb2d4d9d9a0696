//! TUI Application
//!
//! Owns the state and turns keystrokes into state changes.

use crossterm::event::KeyCode;
use log::{debug, info};

use super::input::KeyEvent;
use super::state::{AppState, InteractionMode};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
    /// Rows moved by PageUp/PageDown
    pub scroll_page_size: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            scroll_page_size: 10,
        }
    }
}

/// Main TUI application
pub struct App {
    /// Application state
    state: AppState,
    /// Application config
    pub config: AppConfig,
}

impl App {
    /// Create a new application
    pub fn new(state: AppState, config: AppConfig) -> Self {
        Self { state, config }
    }

    /// Get a reference to the state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: impl Into<KeyEvent>) -> bool {
        let key = key.into();
        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(&key),
            InteractionMode::Search => self.handle_search_key(&key),
        }
        self.state.should_quit
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) {
        if key.is_quit() {
            self.quit();
            return;
        }
        if key.is_tab() {
            self.toggle_view();
            return;
        }
        if key.is_escape() {
            self.clear_search();
            return;
        }
        if key.is_down() {
            self.scroll_by(1);
            return;
        }
        if key.is_up() {
            self.scroll_by(-1);
            return;
        }

        match key.code {
            KeyCode::PageDown => self.scroll_by(self.config.scroll_page_size as isize),
            KeyCode::PageUp => self.scroll_by(-(self.config.scroll_page_size as isize)),
            KeyCode::Home => self.state.scroll = 0,
            _ => match key.char() {
                Some('/') => self.focus_search(),
                Some('v') => self.toggle_view(),
                Some('r') => self.request_reload(),
                Some('j') => self.scroll_by(1),
                Some('k') => self.scroll_by(-1),
                _ => {}
            },
        }
    }

    fn handle_search_key(&mut self, key: &KeyEvent) {
        if key.is_interrupt() {
            self.quit();
        } else if key.is_escape() || key.is_enter() {
            self.state.interaction_mode = InteractionMode::Normal;
        } else if key.is_clear_line() {
            self.clear_search();
        } else if self.state.search.handle_key(key) {
            self.state.scroll = 0;
            debug!("Search query: {:?}", self.state.query());
        }
    }

    /// Start editing the search query
    pub fn focus_search(&mut self) {
        self.state.interaction_mode = InteractionMode::Search;
    }

    /// Clear the search query
    pub fn clear_search(&mut self) {
        self.state.search.clear();
        self.state.scroll = 0;
    }

    /// Switch between cards and table
    pub fn toggle_view(&mut self) {
        self.state.view_mode = self.state.view_mode.toggle();
        self.state.scroll = 0;
        info!("View mode: {}", self.state.view_mode.name());
    }

    /// Ask the runner to start a fresh load cycle
    pub fn request_reload(&mut self) {
        info!("Reload requested");
        self.state.reload_requested = true;
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Move the record area by `delta` rows; the renderer clamps the end
    pub fn scroll_by(&mut self, delta: isize) {
        self.state.scroll = self.state.scroll.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoadOutcome, ToolRecord};
    use crate::selector::ViewMode;
    use crossterm::event::KeyModifiers;

    fn loaded_app() -> App {
        let mut state = AppState::new("test", vec![]);
        state.apply_load(LoadOutcome::Loaded(vec![
            ToolRecord::new("Leonardo.AI", "Feature rich platform"),
            ToolRecord::new("Gemini", "Fastest outputs"),
        ]));
        App::new(state, AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.scroll_page_size, 10);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = loaded_app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_toggle_view_is_symmetric() {
        let mut app = loaded_app();
        assert_eq!(app.state().view_mode, ViewMode::Cards);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().view_mode, ViewMode::Table);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.state().view_mode, ViewMode::Cards);
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.state().interaction_mode, InteractionMode::Search);

        // 'q' and 'v' are text while searching
        type_text(&mut app, "gemini v q");
        assert!(!app.state().should_quit);
        assert_eq!(app.state().view_mode, ViewMode::Cards);
        assert_eq!(app.state().query(), "gemini v q");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
        assert_eq!(app.state().query(), "gemini v q");
    }

    #[test]
    fn test_search_filters_visible_records() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "FASTEST");
        let visible = app.state().visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].tool(), "Gemini");
    }

    #[test]
    fn test_clear_search() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "gem");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.state().query(), "");

        type_text(&mut app, "leo");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().query(), "");
        assert_eq!(app.state().visible().len(), 2);
    }

    #[test]
    fn test_reload_request() {
        let mut app = loaded_app();
        assert!(!app.state().reload_requested);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.state().reload_requested);
    }

    #[test]
    fn test_scrolling() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().scroll, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.state().scroll, 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().scroll, 0);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.state().scroll, 10);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.state().scroll, 0);
    }
}
