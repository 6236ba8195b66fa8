//! Error codes for the drawbom diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document reading errors
//! - `E1xx` - Record extraction errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Reading Errors (E0xx)
    // =========================================================================
    /// Unsupported format.
    ///
    /// The input is not a plain `.drawio` file, or the document is stored
    /// in compressed form.
    E001,

    /// Malformed document.
    ///
    /// The input is not well-formed XML or has no root element.
    E002,

    // =========================================================================
    // Extraction Errors (E1xx)
    // =========================================================================
    /// Malformed amount.
    ///
    /// A BOM shape carries an amount attribute that is not a finite number.
    E100,

    /// Missing required attribute.
    ///
    /// A BOM shape lacks its `label` or `id` attribute.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
    }
}
