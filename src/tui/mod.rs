//! Terminal dashboard for the tool catalog.
//!
//! One screen: a search box, status badges, a bar chart of characteristic
//! counts, and the records as cards or a table. Loading happens on a tokio
//! task while the fallback list stays on screen.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::{App, AppConfig};
pub use events::{Event, EventHandler};
pub use input::{KeyEvent, TextInput};
pub use runner::{Session, TuiRunner};
pub use state::{AppState, InteractionMode};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use log::info;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::sync::Arc;

use crate::config::TuiConfig;
use crate::loader::Loader;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run(loader: Arc<Loader>, config: &TuiConfig) -> Result<()> {
    info!("Launching dashboard for {}", loader.describe());
    let terminal = init_terminal()?;
    let app_config = AppConfig {
        tick_rate_ms: config.tick_rate_ms,
        scroll_page_size: config.scroll_page_size,
    };

    let mut runner = TuiRunner::new(terminal, loader, app_config);
    let result = runner.run().await;
    restore_terminal()?;
    result
}

/// Dashboard palette.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
    pub const OFFLINE: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const BADGE: Color = Color::Rgb(255, 215, 0); // Gold
    pub const BAR: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const LINK: Color = Color::Rgb(100, 149, 237); // Cornflower blue
}
