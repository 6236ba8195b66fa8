//! Collector for accumulating diagnostics during extraction.
//!
//! The [`DiagnosticCollector`] lets the extractor report every malformed
//! shape in a document instead of stopping at the first one.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection, returning `value` if nothing was emitted.
    pub fn finish<T>(self, value: T) -> Result<T, ParseError> {
        if self.diagnostics.is_empty() {
            Ok(value)
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}
