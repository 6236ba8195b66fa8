//! Aggregation of raw records into BOM items.

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};

use crate::record::{BomItem, RawRecord};

/// Groups records by reference, summing amounts and collecting labels and ids.
///
/// Items come out in the order each reference was first seen. Once every
/// record has been folded in, amounts without a fractional part are
/// normalized to integers.
///
/// # Examples
///
/// ```
/// # use drawbom_core::{aggregate::aggregate, amount::Amount, record::RawRecord};
/// let records = vec![
///     RawRecord::new("R1", Amount::Real(2.0), "A", "n1"),
///     RawRecord::new("R2", Amount::ONE, "C", "n3"),
///     RawRecord::new("R1", Amount::Real(1.5), "B", "n2"),
/// ];
///
/// let bom = aggregate(records);
/// assert_eq!(bom[0].reference_id(), "R1");
/// assert_eq!(bom[0].amount().to_string(), "3.5");
/// assert_eq!(bom[1].amount(), Amount::Integer(1));
/// ```
pub fn aggregate(records: impl IntoIterator<Item = RawRecord>) -> Vec<BomItem> {
    debug!("Summing records by reference");

    let mut items: IndexMap<String, BomItem> = IndexMap::new();
    for record in records {
        match items.entry(record.reference_id().to_string()) {
            Entry::Occupied(mut entry) => {
                trace!(reference_id = entry.key(); "Reference already in BOM");
                entry.get_mut().absorb(record);
            }
            Entry::Vacant(entry) => {
                trace!(reference_id = entry.key(); "Adding reference to BOM");
                entry.insert(BomItem::from(record));
            }
        }
    }

    debug!(items_count = items.len(); "Records aggregated");

    items
        .into_values()
        .map(|mut item| {
            item.normalize();
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::amount::Amount;

    use super::*;

    fn record(reference: &str, amount: Amount, label: &str, id: &str) -> RawRecord {
        RawRecord::new(reference, amount, label, id)
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_scenario_from_three_shapes() {
        let bom = aggregate(vec![
            record("R1", Amount::Real(2.0), "A", "n1"),
            record("R1", Amount::Real(1.5), "B", "n2"),
            record("R2", Amount::ONE, "C", "n3"),
        ]);

        assert_eq!(bom.len(), 2);
        assert_eq!(bom[0].reference_id(), "R1");
        assert_eq!(bom[0].amount(), Amount::Real(3.5));
        assert_eq!(bom[0].labels(), ["A", "B"]);
        assert_eq!(bom[0].ids(), ["n1", "n2"]);
        assert_eq!(bom[1].reference_id(), "R2");
        assert_eq!(bom[1].amount(), Amount::Integer(1));
    }

    #[test]
    fn test_whole_sum_is_normalized() {
        let bom = aggregate(vec![
            record("R1", Amount::Real(1.5), "A", "n1"),
            record("R1", Amount::Real(2.5), "B", "n2"),
        ]);

        assert_eq!(bom[0].amount(), Amount::Integer(4));
        assert_eq!(bom[0].amount().to_string(), "4");
    }

    #[test]
    fn test_fractional_sum_is_kept() {
        let bom = aggregate(vec![
            record("R1", Amount::Real(2.0), "A", "n1"),
            record("R1", Amount::Real(2.5), "B", "n2"),
        ]);

        assert_eq!(bom[0].amount().to_string(), "4.5");
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let bom = aggregate(vec![
            record("Z", Amount::ONE, "z", "1"),
            record("A", Amount::ONE, "a", "2"),
            record("Z", Amount::ONE, "z", "3"),
            record("M", Amount::ONE, "m", "4"),
        ]);

        let order: Vec<_> = bom.iter().map(BomItem::reference_id).collect();
        assert_eq!(order, ["Z", "A", "M"]);
        assert_eq!(bom[0].amount(), Amount::Integer(2));
    }

    #[test]
    fn test_duplicate_labels_kept() {
        let bom = aggregate(vec![
            record("R1", Amount::ONE, "Bolt", "n1"),
            record("R1", Amount::ONE, "Bolt", "n2"),
        ]);

        assert_eq!(bom[0].labels(), ["Bolt", "Bolt"]);
    }
}
