//! Domain types for Toolboard
//!
//! This module contains the core domain types:
//! - ToolRecord: One catalog entry as read from the data source
//! - ChartPoint: Bullet count for one visible tool
//! - LoadOutcome: Result of one load cycle (loaded or fell back)

pub mod chart;
pub mod outcome;
pub mod record;

pub use chart::ChartPoint;
pub use outcome::LoadOutcome;
pub use record::ToolRecord;
