//! Error types for Stemma operations.
//!
//! This module provides the main error type [`StemmaError`]. Building a
//! layout never fails on malformed lineage data; errors only come from
//! reading input, configuration, and serializing output.

use std::io;

use thiserror::Error;

/// The main error type for Stemma operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the JSON source next to the deserialization
/// error so the line and column it reports can be shown in context.
#[derive(Debug, Error)]
pub enum StemmaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(serde_json::Error),
}

impl StemmaError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
