//! # drawbom Parser
//!
//! Reading of draw.io documents and extraction of BOM records from them.
//!
//! ## Usage
//!
//! ```
//! # use drawbom_core::keys::BomKeys;
//! # use drawbom_parser::{parse, error::ReadError};
//!
//! fn main() -> Result<(), ReadError> {
//!     let source = r#"
//!         <mxfile>
//!           <diagram>
//!             <object label="Resistor" BOM_ID="R-10k" BOM_AMOUNT="2" id="n1"/>
//!           </diagram>
//!         </mxfile>
//!     "#;
//!
//!     let records = parse(source, &BomKeys::default())?;
//!     assert_eq!(records[0].reference_id(), "R-10k");
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod reader;

mod extract;
mod span;

pub use extract::extract;
pub use span::Span;

use drawbom_core::{keys::BomKeys, record::RawRecord};

use error::ReadError;
use reader::PlainDrawioReader;

/// Parse plain draw.io XML and extract its BOM records.
///
/// This runs the same pipeline as reading a `.drawio` file:
///
/// 1. **Parse** - Build the element tree, refusing compressed documents
/// 2. **Extract** - Turn BOM shapes into validated records
///
/// # Errors
///
/// Returns [`ReadError::Parse`] with the source text attached for any
/// reading or extraction diagnostic.
pub fn parse(source: impl Into<String>, keys: &BomKeys) -> Result<Vec<RawRecord>, ReadError> {
    let document = PlainDrawioReader.read_source(source.into())?;
    extract(&document, keys).map_err(|err| ReadError::new_parse_error(err, document.source()))
}
