//! Custom error types for lineedit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for lineedit operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// File or directory not found
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File or directory already present at the destination
    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: &'static str,
        identifier: String,
    },

    /// Line numbers start at 1
    #[error("Invalid line number: {0}")]
    InvalidPosition(i64),

    /// Line number past the end of the file
    #[error("Line {position} does not exist. Total lines: {total}")]
    LineNotFound { position: usize, total: usize },

    /// The changelog could not be opened or written
    #[error("Could not open changelog: {0}")]
    LogUnavailable(String),

    /// Interactive input reached end of stream
    #[error("Input stream closed")]
    InputClosed,
}

impl EditorError {
    /// Create a "not found" error for files
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: path.as_ref().display().to_string(),
        }
    }

    /// Create a "not found" error for directories
    pub fn directory_not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            entity_type: "Directory",
            identifier: path.as_ref().display().to_string(),
        }
    }

    /// Create an "already exists" error for files
    pub fn file_exists(path: impl AsRef<Path>) -> Self {
        Self::AlreadyExists {
            entity_type: "File",
            identifier: path.as_ref().display().to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for lineedit operations
pub type EditorResult<T> = Result<T, EditorError>;
