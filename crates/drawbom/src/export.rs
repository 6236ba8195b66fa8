//! Export of a BOM as a delimited text table.
//!
//! The first row holds the two attribute names, every following row one
//! item's reference and summed amount:
//!
//! ```text
//! BOM_ID;BOM_AMOUNT
//! R1;3.5
//! R2;1
//! ```

use std::io;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use drawbom_core::{keys::BomKeys, record::BomItem};

/// Field separator of the exported table.
pub const DELIMITER: u8 = b';';

/// Write `bom` as a table to `writer`.
///
/// Fields containing the delimiter, a quote or a line break are quoted.
///
/// # Errors
///
/// Returns the underlying error if writing fails.
pub fn write_table<W: io::Write>(
    writer: W,
    keys: &BomKeys,
    bom: &[BomItem],
) -> Result<(), csv::Error> {
    let mut table = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    table.write_record([keys.id_key(), keys.amount_key()])?;
    for item in bom {
        let amount = item.amount().to_string();
        table.write_record([item.reference_id(), amount.as_str()])?;
    }
    table.flush()?;

    debug!(rows_count = bom.len(); "Table written");
    Ok(())
}
