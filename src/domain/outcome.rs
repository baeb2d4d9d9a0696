//! Load cycle outcome types.

use super::record::ToolRecord;

/// Outcome of one load cycle.
///
/// Either the source delivered a record list, or the load failed and the
/// fallback list stands in. Both variants carry a complete list, so the
/// consumer replaces its records wholesale either way.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Source was read and parsed
    Loaded(Vec<ToolRecord>),
    /// Source failed; fallback records with the failure reason
    Fallback { records: Vec<ToolRecord>, reason: String },
}

impl LoadOutcome {
    /// Records to display after this load
    pub fn records(&self) -> &[ToolRecord] {
        match self {
            Self::Loaded(records) => records,
            Self::Fallback { records, .. } => records,
        }
    }

    /// Failure message, if the load fell back
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Whether the load fell back to the fallback list
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Split into `(records, error)`
    pub fn into_parts(self) -> (Vec<ToolRecord>, Option<String>) {
        match self {
            Self::Loaded(records) => (records, None),
            Self::Fallback { records, reason } => (records, Some(reason)),
        }
    }
}
