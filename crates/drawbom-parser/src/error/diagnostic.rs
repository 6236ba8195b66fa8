//! The diagnostic type reported by the reader and the extractor.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// A span in the source document with a message attached.
///
/// Primary labels mark where the problem is; secondary labels add context.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// A single error found in a draw.io document.
///
/// Rendered by the CLI as:
///
/// ```text
/// error[E100]: invalid amount `two` in attribute `BOM_AMOUNT`
///    ,-[board.drawio:12:9]
/// 12 |   <object label="Bolt" BOM_ID="M3" BOM_AMOUNT="two" id="n4">
///    :   ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ on this element
///    `----
///   help: amounts must be numbers, such as `2` or `1.5`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error(ErrorCode::E101, "missing `id`");

        assert_eq!(diag.code(), ErrorCode::E101);
        assert_eq!(diag.message(), "missing `id`");
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_labels_keep_order() {
        let diag = Diagnostic::error(ErrorCode::E100, "bad amount")
            .with_label(Span::new(10..20), "here")
            .with_secondary_label(Span::new(0..5), "inside this diagram");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert_eq!(diag.labels()[0].span(), Span::new(10..20));
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.labels()[1].message(), "inside this diagram");
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error(ErrorCode::E001, "compressed").with_help("save uncompressed");

        assert_eq!(diag.help(), Some("save uncompressed"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(ErrorCode::E100, "invalid amount `x`");

        assert_eq!(diag.to_string(), "error[E100]: invalid amount `x`");
    }
}
