//! drawbom - Bills of materials from draw.io diagrams.
//!
//! Shapes in a diagram are tagged with a part reference (`BOM_ID` by
//! default) and optionally a count (`BOM_AMOUNT`). drawbom reads the
//! diagram, collects the tagged shapes, sums their counts per reference and
//! writes the result as a `;`-separated table.

pub mod config;
pub mod export;

mod error;

pub use drawbom_core::{aggregate, amount, keys, record};

pub use error::DrawBomError;

use std::{io, path::Path};

use log::{debug, info, trace};

use drawbom_parser::reader;

use config::AppConfig;
use record::BomItem;

/// Builder for extracting and exporting bills of materials.
///
/// # Examples
///
/// ```rust
/// use drawbom::{BomBuilder, config::AppConfig};
///
/// let source = r#"
///     <mxfile><diagram><mxGraphModel><root>
///       <object label="A" BOM_ID="R1" BOM_AMOUNT="2" id="n1"/>
///       <object label="B" BOM_ID="R1" BOM_AMOUNT="1.5" id="n2"/>
///       <object label="C" BOM_ID="R2" id="n3"/>
///     </root></mxGraphModel></diagram></mxfile>
/// "#;
///
/// let builder = BomBuilder::new(AppConfig::default());
/// let bom = builder.parse(source).expect("Failed to parse");
/// let table = builder.render_table(&bom).expect("Failed to render");
///
/// assert_eq!(table, "BOM_ID;BOM_AMOUNT\nR1;3.5\nR2;1\n");
/// ```
#[derive(Debug, Default)]
pub struct BomBuilder {
    config: AppConfig,
}

impl BomBuilder {
    /// Create a new BOM builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Read a diagram file and aggregate its BOM.
    ///
    /// The reader is chosen from the file name; only plain `.drawio` files
    /// are currently supported.
    ///
    /// # Errors
    ///
    /// Returns `DrawBomError` for unsupported or unreadable files, malformed
    /// documents and malformed BOM shapes.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<BomItem>, DrawBomError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Extracting BOM");

        let document = reader::reader_for_path(path)?.read(path)?;
        let records = drawbom_parser::extract(&document, self.config.bom())
            .map_err(|err| DrawBomError::new_parse_error(err, document.source()))?;

        Ok(self.aggregate(records))
    }

    /// Parse plain draw.io XML and aggregate its BOM.
    ///
    /// # Errors
    ///
    /// Returns `DrawBomError` for malformed or compressed documents and
    /// malformed BOM shapes.
    pub fn parse(&self, source: &str) -> Result<Vec<BomItem>, DrawBomError> {
        info!("Parsing diagram");
        let records = drawbom_parser::parse(source, self.config.bom())?;
        Ok(self.aggregate(records))
    }

    /// Render a BOM as a delimited table.
    ///
    /// # Errors
    ///
    /// Returns `DrawBomError::Export` if the table cannot be produced.
    pub fn render_table(&self, bom: &[BomItem]) -> Result<String, DrawBomError> {
        let mut out = Vec::new();
        self.write_table(&mut out, bom)?;
        String::from_utf8(out).map_err(|err| DrawBomError::Export(Box::new(err)))
    }

    /// Write a BOM as a delimited table to `writer`.
    ///
    /// # Errors
    ///
    /// Returns `DrawBomError::Export` if writing fails.
    pub fn write_table<W: io::Write>(&self, writer: W, bom: &[BomItem]) -> Result<(), DrawBomError> {
        export::write_table(writer, self.config.bom(), bom)?;
        Ok(())
    }

    fn aggregate(&self, records: Vec<record::RawRecord>) -> Vec<BomItem> {
        debug!(records_count = records.len(); "Aggregating records");
        let bom = aggregate::aggregate(records);
        trace!(bom:?; "Aggregated BOM");
        info!(items_count = bom.len(); "BOM aggregated");
        bom
    }
}
