//! Error types for Toolboard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Toolboard
#[derive(Debug, Error)]
pub enum ToolboardError {
    /// Source answered with a non-success HTTP status
    #[error("Failed to fetch data: {0}")]
    HttpStatus(u16),

    /// Transport-level failure talking to the source
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configured base could not be turned into a source location
    #[error("Invalid source location: {0}")]
    InvalidLocation(String),

    /// Document parsed, but the top-level value is not an array
    #[error("Expected a JSON array of tool records")]
    NotAnArray,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Toolboard operations
pub type Result<T> = std::result::Result<T, ToolboardError>;
