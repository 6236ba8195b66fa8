//! Example: Building a BOM from records
//!
//! This example shows how to aggregate records created programmatically,
//! without reading a diagram, and export them with custom attribute names.

use drawbom::{
    BomBuilder,
    aggregate::aggregate,
    amount::Amount,
    config::AppConfig,
    keys::BomKeys,
    record::RawRecord,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        RawRecord::new("M3x8", Amount::Real(4.0), "Screw", "s1"),
        RawRecord::new("M3-nut", Amount::ONE, "Nut", "s2"),
        RawRecord::new("M3x8", Amount::Real(0.5), "Screw (half bag)", "s3"),
    ];

    let bom = aggregate(records);
    for item in &bom {
        println!(
            "{} x{} from shapes {:?}",
            item.reference_id(),
            item.amount(),
            item.ids()
        );
    }

    let builder = BomBuilder::new(AppConfig::new(BomKeys::new("PART", "QTY")));
    print!("{}", builder.render_table(&bom)?);

    Ok(())
}
