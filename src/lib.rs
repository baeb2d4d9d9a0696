//! Toolboard - a terminal dashboard for a catalog of AI image tools
//!
//! Loads tool records from a JSON array over HTTP or from disk, normalizes
//! their free-form fields, and presents them as searchable cards or a table
//! alongside a bar chart of characteristic counts.

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod selector;
pub mod tui;

pub use error::{Result, ToolboardError};
