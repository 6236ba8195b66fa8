//! Records flowing through BOM extraction.
//!
//! A [`RawRecord`] describes one diagram shape that carries a part
//! reference. A [`BomItem`] is the aggregate of every record sharing the
//! same reference.

use crate::amount::Amount;

/// One BOM-carrying shape, validated and detached from its attribute map.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    reference_id: String,
    amount: Amount,
    label: String,
    node_id: String,
}

impl RawRecord {
    /// Creates a new [`RawRecord`].
    ///
    /// # Arguments
    ///
    /// * `reference_id` - The part reference used as the grouping key.
    /// * `amount` - The quantity this shape contributes.
    /// * `label` - The shape's display text.
    /// * `node_id` - The diagram identifier of the shape.
    pub fn new(
        reference_id: impl Into<String>,
        amount: Amount,
        label: impl Into<String>,
        node_id: impl Into<String>,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            amount,
            label: label.into(),
            node_id: node_id.into(),
        }
    }

    /// Returns the part reference.
    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    /// Returns the quantity contributed by this shape.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the display text of the shape.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the diagram identifier of the shape.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }
}

/// One line of the bill of materials.
///
/// `labels` and `ids` hold one entry per contributing shape, in the order
/// the shapes were seen. Duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BomItem {
    reference_id: String,
    amount: Amount,
    labels: Vec<String>,
    ids: Vec<String>,
}

impl BomItem {
    /// Returns the part reference.
    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    /// Returns the summed quantity.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the labels of all contributing shapes.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the identifiers of all contributing shapes.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Iterates over `(label, node_id)` pairs of the contributing shapes.
    pub fn contributions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.ids.iter().map(String::as_str))
    }

    /// Folds another record with the same reference into this item.
    pub(crate) fn absorb(&mut self, record: RawRecord) {
        debug_assert_eq!(self.reference_id, record.reference_id);
        self.amount += record.amount;
        self.labels.push(record.label);
        self.ids.push(record.node_id);
    }

    pub(crate) fn normalize(&mut self) {
        self.amount = self.amount.normalized();
    }
}

impl From<RawRecord> for BomItem {
    fn from(record: RawRecord) -> Self {
        Self {
            reference_id: record.reference_id,
            amount: record.amount,
            labels: vec![record.label],
            ids: vec![record.node_id],
        }
    }
}
