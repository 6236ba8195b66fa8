//! Error types returned from reading and extraction.

use std::{fmt, io};

use thiserror::Error;

use crate::error::{Diagnostic, ErrorCode};

/// Error type for reading and extraction.
///
/// Wraps one or more diagnostics.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code() == code)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

/// Error returned by a [`DocumentReader`](crate::reader::DocumentReader).
///
/// The `Parse` variant keeps the document text so diagnostics can be shown
/// against it. It is empty when the file was refused before being read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl ReadError {
    /// Create a new `Parse` error with the associated document text.
    pub fn new_parse_error(err: impl Into<ParseError>, src: impl Into<String>) -> Self {
        Self::Parse {
            err: err.into(),
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::error(ErrorCode::E002, "not xml").into();

        assert_eq!(err.diagnostics().len(), 1);
        assert!(err.has_code(ErrorCode::E002));
        assert!(!err.has_code(ErrorCode::E001));
    }

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::error(ErrorCode::E100, "invalid amount").into();

        assert_eq!(err.to_string(), "error[E100]: invalid amount");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err: ParseError = vec![
            Diagnostic::error(ErrorCode::E100, "first error"),
            Diagnostic::error(ErrorCode::E101, "second error"),
            Diagnostic::error(ErrorCode::E101, "third error"),
        ]
        .into();

        assert_eq!(err.to_string(), "error[E100]: first error (+2 more)");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ReadError::new_parse_error(
            Diagnostic::error(ErrorCode::E001, "compressed"),
            "<mxfile/>",
        );

        match err {
            ReadError::Parse { src, .. } => assert_eq!(src, "<mxfile/>"),
            ReadError::Io(_) => panic!("Expected Parse"),
        }
    }
}
