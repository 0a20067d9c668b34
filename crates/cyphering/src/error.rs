//! Error types for Cyphering operations.
//!
//! This module provides the main error type [`CypheringError`] which wraps
//! the error conditions that can occur while compiling a model.

use std::io;

use thiserror::Error;

use cyphering_parser::error::ParseError;

/// The main error type for Cyphering operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the diagnostics of the model pipeline
/// together with the model source, so callers can render source snippets
/// for diagnostics that know their location.
#[derive(Debug, Error)]
pub enum CypheringError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl CypheringError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

impl From<handlebars::TemplateError> for CypheringError {
    fn from(error: handlebars::TemplateError) -> Self {
        Self::Template(error.to_string())
    }
}

impl From<handlebars::RenderError> for CypheringError {
    fn from(error: handlebars::RenderError) -> Self {
        Self::Render(error.to_string())
    }
}
