//! Chart data points.

use serde::Serialize;

/// Number of characteristic bullets found for one tool.
///
/// One point is produced per visible record, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Display label for the bar
    pub tool: String,
    /// Bullet count
    pub items: usize,
}

impl ChartPoint {
    /// Create a new chart point
    pub fn new(tool: impl Into<String>, items: usize) -> Self {
        Self {
            tool: tool.into(),
            items,
        }
    }
}
