//! Error and diagnostic system for reading draw.io documents.
//!
//! Every problem found while reading or extracting is reported as a
//! [`Diagnostic`]: an [`ErrorCode`], a message, labeled spans pointing into
//! the source document and optional help text. One or more diagnostics are
//! wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use drawbom_parser::error::{Diagnostic, ErrorCode};
//! # use drawbom_parser::Span;
//!
//! let diag = Diagnostic::error(ErrorCode::E100, "invalid amount `two`")
//!     .with_label(Span::new(120..180), "on this element")
//!     .with_help("amounts must be numbers, such as `2` or `1.5`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use parse_error::{ParseError, ReadError};
