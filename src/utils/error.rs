//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading the compressed trace
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read trace input: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur while loading a template mapping file
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read mapping file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid event code in mapping file: {0:?}")]
    InvalidCode(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
