//! Error types for viewer rendering and display hand-off.

use thiserror::Error;

/// Errors that can occur while rendering or displaying a JSON document.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The host display channel rejected the assembled document.
    /// Carries the original cause; callers see one uniform error shape.
    #[error("rendering failed: {source}")]
    Display {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience alias used throughout jsonview-core.
pub type Result<T> = std::result::Result<T, ViewerError>;
