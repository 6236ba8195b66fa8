//! Extraction of raw BOM records from a document tree.
//!
//! Any element carrying the configured reference attribute is a BOM shape,
//! whatever its tag or depth. Elements without it are skipped. BOM shapes
//! are then checked strictly: they need `label` and `id` attributes, and an
//! amount attribute, when present, must be a finite number.

use log::{debug, trace};

use drawbom_core::{amount::Amount, keys::BomKeys, record::RawRecord};

use crate::{
    document::{Document, Node},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
};

const LABEL_ATTRIBUTE: &str = "label";
const ID_ATTRIBUTE: &str = "id";
const PAGE_TAG: &str = "diagram";

/// Collect one [`RawRecord`] per BOM shape, in document order.
///
/// # Errors
///
/// Returns a [`ParseError`] with one diagnostic per offending shape:
/// [`ErrorCode::E100`] for an amount that is not a number and
/// [`ErrorCode::E101`] for a missing `label` or `id`. No records are
/// returned when any shape is rejected.
pub fn extract(document: &Document, keys: &BomKeys) -> Result<Vec<RawRecord>, ParseError> {
    debug!(id_key = keys.id_key(), amount_key = keys.amount_key(); "Extracting BOM records");

    let mut collector = DiagnosticCollector::new();
    let mut records = Vec::new();

    // Pre-order walk that remembers the enclosing `<diagram>` page.
    let mut stack: Vec<(&Node, Option<&Node>)> = vec![(document.root(), None)];
    while let Some((node, page)) = stack.pop() {
        let page = if node.tag() == PAGE_TAG { Some(node) } else { page };
        stack.extend(node.children().iter().rev().map(|child| (child, page)));

        let Some(reference_id) = node.attribute(keys.id_key()) else {
            continue;
        };

        match record_from_node(node, reference_id, keys) {
            Ok(record) => {
                trace!(record:?; "Found BOM shape");
                records.push(record);
            }
            Err(diagnostics) => diagnostics
                .into_iter()
                .map(|d| with_page_label(d, page))
                .for_each(|d| collector.emit(d)),
        }
    }

    debug!(records_count = records.len(); "Records extracted");
    collector.finish(records)
}

/// Point a diagnostic at the page the shape sits on, if any.
fn with_page_label(diagnostic: Diagnostic, page: Option<&Node>) -> Diagnostic {
    let Some(page) = page else {
        return diagnostic;
    };
    let message = match page.attribute("name").or_else(|| page.attribute(ID_ATTRIBUTE)) {
        Some(name) => format!("on page `{name}`"),
        None => "on this page".to_string(),
    };
    diagnostic.with_secondary_label(page.span(), message)
}

fn record_from_node(
    node: &Node,
    reference_id: &str,
    keys: &BomKeys,
) -> Result<RawRecord, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    let amount = match node.attribute(keys.amount_key()) {
        None => Some(Amount::ONE),
        Some(text) => match text.parse::<Amount>() {
            Ok(amount) => Some(amount),
            Err(err) => {
                diagnostics.push(
                    Diagnostic::error(
                        ErrorCode::E100,
                        format!(
                            "invalid amount for `{reference_id}` in attribute `{}`: {err}",
                            keys.amount_key()
                        ),
                    )
                    .with_label(node.span(), "on this element")
                    .with_help("amounts must be numbers, such as `2` or `1.5`"),
                );
                None
            }
        },
    };

    let label = required_attribute(node, reference_id, LABEL_ATTRIBUTE, &mut diagnostics);
    let node_id = required_attribute(node, reference_id, ID_ATTRIBUTE, &mut diagnostics);

    match (amount, label, node_id) {
        (Some(amount), Some(label), Some(node_id)) if diagnostics.is_empty() => {
            Ok(RawRecord::new(reference_id, amount, label, node_id))
        }
        _ => Err(diagnostics),
    }
}

fn required_attribute<'a>(
    node: &'a Node,
    reference_id: &str,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'a str> {
    let value = node.attribute(name);
    if value.is_none() {
        diagnostics.push(
            Diagnostic::error(
                ErrorCode::E101,
                format!("BOM shape `{reference_id}` is missing required attribute `{name}`"),
            )
            .with_label(node.span(), format!("`<{}>` without `{name}`", node.tag())),
        );
    }
    value
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Shapes as `(reference, amount)`, where `None` omits the amount
    /// attribute and an empty reference marks an unrelated shape.
    fn shapes_strategy() -> impl Strategy<Value = Vec<(String, Option<u32>)>> {
        let reference = prop_oneof![Just(String::new()), "[A-Z][0-9]?"];
        prop::collection::vec((reference, prop::option::of(0u32..500)), 0..30)
    }

    fn document_for(shapes: &[(String, Option<u32>)]) -> Document {
        let body: String = shapes
            .iter()
            .enumerate()
            .map(|(index, (reference, amount))| {
                let reference = if reference.is_empty() {
                    String::new()
                } else {
                    format!(r#" BOM_ID="{reference}""#)
                };
                let amount = amount
                    .map(|a| format!(r#" BOM_AMOUNT="{a}""#))
                    .unwrap_or_default();
                format!(r#"<object label="s{index}" id="n{index}"{reference}{amount}/>"#)
            })
            .collect();

        Document::from_source(format!("<mxfile><root>{body}</root></mxfile>"))
            .expect("generated document should parse")
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Only tagged shapes become records, in order, with their amounts.
    fn check_records_match_tagged_shapes(
        shapes: Vec<(String, Option<u32>)>,
    ) -> Result<(), TestCaseError> {
        let doc = document_for(&shapes);
        let records = extract(&doc, &BomKeys::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let expected: Vec<RawRecord> = shapes
            .iter()
            .enumerate()
            .filter(|(_, (reference, _))| !reference.is_empty())
            .map(|(index, (reference, amount))| {
                let amount = amount.map_or(Amount::ONE, |a| Amount::Real(f64::from(a)));
                RawRecord::new(reference.as_str(), amount, format!("s{index}"), format!("n{index}"))
            })
            .collect();

        prop_assert_eq!(records, expected);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn records_match_tagged_shapes(shapes in shapes_strategy()) {
            check_records_match_tagged_shapes(shapes)?;
        }
    }
}
