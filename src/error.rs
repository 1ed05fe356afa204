//! Error types for the cmaps crate.
//!
//! Every fallible operation in the crate returns [`CmapsError`]. Table
//! operations fail synchronously and deterministically; nothing is retried
//! or silently recovered.

use thiserror::Error;

/// The main error type for cmaps operations.
#[derive(Error, Debug)]
pub enum CmapsError {
    /// Malformed or empty color table data
    #[error("Invalid color table: {message}")]
    InvalidTable { message: String },

    /// Invalid argument (step, size or count) passed to a table operation
    #[error("Invalid argument: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// Two tables with different channel counts were combined
    #[error("Incompatible tables: cannot combine {left} entries with {right} entries")]
    IncompatibleTable { left: String, right: String },

    /// Single-element access outside the table
    #[error("Index out of bounds: index {index} for table of length {len}")]
    IndexOutOfBounds { index: isize, len: usize },

    /// Unknown colormap name
    #[error("Colormap not found: {name}")]
    NotFound { name: String },

    /// A colormap with the same name is already registered
    #[error("Colormap already registered: {name}")]
    AlreadyRegistered { name: String },

    /// Unparsable number in a table file
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Image generation errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CmapsError {
    pub(crate) fn invalid_argument(param: &str, message: impl Into<String>) -> Self {
        CmapsError::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_table(message: impl Into<String>) -> Self {
        CmapsError::InvalidTable {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with CmapsError
pub type Result<T> = std::result::Result<T, CmapsError>;
