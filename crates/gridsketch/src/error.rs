//! Error types for Gridsketch operations.
//!
//! This module provides the main error type [`GridsketchError`]. Rendering
//! itself never fails; errors come from reading scene input and from the
//! workspace session layer.

use std::io;

use thiserror::Error;

/// The main error type for Gridsketch operations.
///
/// # Diagnostic Variants
///
/// The `Json` variant keeps the source text next to the decoding error, so a
/// caller can point at the offending line and column.
#[derive(Debug, Error)]
pub enum GridsketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid scene: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error("Unknown workspace ID: {0}")]
    WorkspaceNotFound(String),

    #[error("Unknown shape ID `{shape}` in workspace `{workspace}`")]
    ShapeNotFound { workspace: String, shape: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GridsketchError {
    /// Create a new `Json` error with the associated source text.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }
}
