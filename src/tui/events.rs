//! Event handling for the TUI.
//!
//! Every input to the dashboard arrives as an `Event` on one channel:
//! keystrokes and resizes from a terminal reader thread, periodic ticks, and
//! load results from the loader task. The runner consumes them one at a time,
//! so state is only ever touched from a single place.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::{Result, eyre};
use log::{debug, warn};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::domain::LoadOutcome;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Poll timeout with no input
    Tick,
    /// Terminal resize
    Resize(u16, u16),
    /// A load cycle finished
    Loaded { generation: u64, outcome: LoadOutcome },
}

/// Single queue of TUI events.
pub struct EventHandler {
    tick_rate: Duration,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    reader_started: bool,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            tx,
            rx,
            reader_started: false,
        }
    }

    /// Sender for producers outside the terminal reader (load tasks)
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Start reading terminal input on a background thread.
    ///
    /// The thread exits on its own once the handler is dropped.
    pub fn start_terminal_reader(&mut self) {
        if self.reader_started {
            return;
        }
        self.reader_started = true;

        let tx = self.tx.clone();
        let tick_rate = self.tick_rate;
        thread::spawn(move || {
            loop {
                let next = match read_terminal_event(tick_rate) {
                    Ok(next) => next,
                    Err(e) => {
                        warn!("Terminal input reader stopped: {}", e);
                        break;
                    }
                };
                if let Some(next) = next
                    && tx.send(next).is_err()
                {
                    break;
                }
            }
            debug!("Terminal input reader exited");
        });
    }

    /// Wait for the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre!("Event channel closed"))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Poll the terminal once. `None` means an event the dashboard ignores.
fn read_terminal_event(tick_rate: Duration) -> Result<Option<Event>> {
    if !event::poll(tick_rate)? {
        return Ok(Some(Event::Tick));
    }
    let next = match event::read()? {
        // Only handle key press events, not release
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    };
    Ok(next)
}
