//! Error types for drawbom operations.
//!
//! This module provides the main error type [`DrawBomError`] which wraps
//! the error conditions that can occur while producing a BOM.

use std::io;

use thiserror::Error;

use drawbom_parser::error::{ParseError, ReadError};

/// The main error type for drawbom operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries diagnostics with spans into `src`, the text
/// of the diagram that was being read. `src` is empty when the file was
/// refused before it was read.
#[derive(Debug, Error)]
pub enum DrawBomError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<ReadError> for DrawBomError {
    fn from(error: ReadError) -> Self {
        match error {
            ReadError::Io(err) => Self::Io(err),
            ReadError::Parse { err, src } => Self::Parse { err, src },
        }
    }
}

impl From<csv::Error> for DrawBomError {
    fn from(error: csv::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DrawBomError {
    /// Create a new `Parse` error with the associated diagram text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
