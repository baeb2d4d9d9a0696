//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal and the event queue. It runs the main
//! loop: render → wait for an event → hand it to the session → repeat.
//!
//! `Session` holds everything that does not need a terminal: the app and
//! the load-cycle bookkeeping. Loads run as tokio tasks that post their
//! outcome back as an event. Each load cycle gets a generation number; a
//! reload aborts the running task and bumps the generation, so an outcome
//! from an abandoned cycle is dropped even if it was already queued.

use std::sync::Arc;

use eyre::Result;
use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::Tui;
use super::app::{App, AppConfig};
use super::events::{Event, EventHandler};
use super::state::AppState;
use super::views::render;
use crate::loader::Loader;

/// App state plus load-cycle bookkeeping.
pub struct Session {
    /// Application state and input handling
    app: App,
    /// Shared with load tasks
    loader: Arc<Loader>,
    /// Where load tasks post their outcome
    events: UnboundedSender<Event>,
    /// Current load cycle
    generation: u64,
    /// In-flight load task, if any
    load_task: Option<JoinHandle<()>>,
}

impl Session {
    /// Create a session showing the fallback list until the first load lands.
    pub fn new(loader: Arc<Loader>, config: AppConfig, events: UnboundedSender<Event>) -> Self {
        let state = AppState::new(loader.describe(), loader.fallback().to_vec());
        Self {
            app: App::new(state, config),
            loader,
            events,
            generation: 0,
            load_task: None,
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Current load cycle
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Spawn a load task for a new generation.
    pub fn start_load(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let loader = Arc::clone(&self.loader);
        let tx = self.events.clone();

        self.load_task = Some(tokio::spawn(async move {
            let outcome = loader.load().await;
            // Receiver gone means the TUI already exited
            let _ = tx.send(Event::Loaded { generation, outcome });
        }));
        debug!("Started load cycle {}", generation);
    }

    /// Apply one event. Returns true when the app should quit.
    pub fn on_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                if self.app.handle_key(key) {
                    return true;
                }
            }
            Event::Loaded { generation, outcome } => {
                if generation == self.generation {
                    self.app.state_mut().apply_load(outcome);
                    self.load_task = None;
                } else {
                    debug!("Dropping outcome of abandoned load cycle {}", generation);
                }
            }
            Event::Tick | Event::Resize(_, _) => {}
        }

        if self.app.state().reload_requested {
            self.reload();
        }
        false
    }

    /// Abort the in-flight load, if any.
    pub fn cancel_load(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
    }

    /// Restart from scratch, like reopening the dashboard.
    fn reload(&mut self) {
        info!("Reloading (abandoning cycle {})", self.generation);
        self.cancel_load();
        self.app.state_mut().restart(self.loader.fallback().to_vec());
        self.start_load();
    }
}

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Event queue
    event_handler: EventHandler,
    /// App and load cycles
    session: Session,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, loader: Arc<Loader>, config: AppConfig) -> Self {
        let event_handler = EventHandler::new(config.tick_rate_ms);
        let session = Session::new(loader, config, event_handler.sender());
        Self {
            terminal,
            event_handler,
            session,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        self.event_handler.start_terminal_reader();
        self.session.start_load();

        loop {
            self.terminal.draw(|f| render(self.session.app().state(), f))?;

            let event = self.event_handler.next().await?;
            if self.session.on_event(event) {
                break;
            }
        }

        self.session.cancel_load();
        info!("TUI main loop ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoadOutcome, ToolRecord};
    use crate::loader::DataSource;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct FixedSource(Vec<ToolRecord>);

    #[async_trait]
    impl DataSource for FixedSource {
        async fn fetch(&self) -> crate::error::Result<Vec<ToolRecord>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn catalog() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("Leonardo.AI", "Feature rich platform"),
            ToolRecord::new("Gemini", "Fastest outputs"),
        ]
    }

    fn fallback() -> Vec<ToolRecord> {
        vec![ToolRecord::new("Offline Tool", "Cached")]
    }

    fn session(handler: &EventHandler) -> Session {
        let loader = Loader::new(Box::new(FixedSource(catalog()))).with_fallback(fallback());
        Session::new(Arc::new(loader), AppConfig::default(), handler.sender())
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_outcome_from_older_generation_is_ignored() {
        let handler = EventHandler::default();
        let mut session = session(&handler);
        session.start_load();
        session.start_load();
        assert_eq!(session.generation(), 2);

        session.on_event(Event::Loaded {
            generation: 1,
            outcome: LoadOutcome::Loaded(vec![ToolRecord::new("Stale", "")]),
        });

        let state = session.app().state();
        assert!(state.is_loading());
        assert_eq!(state.records(), fallback().as_slice());
    }

    #[tokio::test]
    async fn test_current_generation_replaces_records() {
        let mut handler = EventHandler::default();
        let mut session = session(&handler);
        session.start_load();
        assert!(session.app().state().is_loading());

        let event = handler.next().await.unwrap();
        assert!(matches!(event, Event::Loaded { generation: 1, .. }));
        assert!(!session.on_event(event));

        let state = session.app().state();
        assert!(!state.is_loading());
        assert!(state.load_error().is_none());
        assert_eq!(state.records(), catalog().as_slice());
    }

    #[tokio::test]
    async fn test_reload_drops_already_queued_outcome() {
        let mut handler = EventHandler::default();
        let mut session = session(&handler);
        session.start_load();

        // The first cycle has finished but its outcome is still queued
        let queued = handler.next().await.unwrap();

        session.on_event(key('/'));
        session.on_event(key('g'));
        session.on_event(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        session.on_event(key('r'));
        assert_eq!(session.generation(), 2);
        assert!(!session.app().state().reload_requested);
        assert_eq!(session.app().state().query(), "");

        session.on_event(queued);
        assert!(session.app().state().is_loading());
        assert_eq!(session.app().state().records(), fallback().as_slice());

        let fresh = handler.next().await.unwrap();
        assert!(matches!(fresh, Event::Loaded { generation: 2, .. }));
        session.on_event(fresh);
        assert!(!session.app().state().is_loading());
        assert_eq!(session.app().state().records(), catalog().as_slice());
    }

    #[tokio::test]
    async fn test_quit_key_ends_session() {
        let handler = EventHandler::default();
        let mut session = session(&handler);
        assert!(!session.on_event(Event::Tick));
        assert!(session.on_event(key('q')));
    }
}
