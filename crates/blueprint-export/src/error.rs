//! Error types for the output writer.

use std::path::PathBuf;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while writing documents.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to write an output file or create its directory.
    #[error("Failed to write file {path}: {message}")]
    WriteError { path: PathBuf, message: String },

    /// Rendering or lookup failed in the core.
    #[error(transparent)]
    Core(#[from] blueprint_core::Error),

    /// Failed to serialize JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
