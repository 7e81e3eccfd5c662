//! Error types for the API boundary
//!
//! Core editing and rendering are total; only name parsing and option
//! decoding coming from JavaScript can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Toolbar operation name not recognized
    #[error("Unknown formatting operation: {0}")]
    UnknownOperation(String),

    /// Template name not recognized
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Render options object could not be decoded
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),
}
