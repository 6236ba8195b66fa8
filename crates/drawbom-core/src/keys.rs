//! Attribute names that mark BOM shapes.

use serde::Deserialize;

/// Default attribute carrying a part reference.
pub const DEFAULT_ID_KEY: &str = "BOM_ID";

/// Default attribute carrying a part count.
pub const DEFAULT_AMOUNT_KEY: &str = "BOM_AMOUNT";

/// The pair of attribute names used to pick BOM shapes out of a diagram.
///
/// A shape takes part in the BOM only when it carries [`id_key`](Self::id_key);
/// [`amount_key`](Self::amount_key) is optional on each shape. Both names
/// also form the header of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BomKeys {
    /// Attribute holding the part reference.
    #[serde(default = "default_id_key")]
    id_key: String,

    /// Attribute holding the part count.
    #[serde(default = "default_amount_key")]
    amount_key: String,
}

impl BomKeys {
    /// Creates a new [`BomKeys`] from the two attribute names.
    pub fn new(id_key: impl Into<String>, amount_key: impl Into<String>) -> Self {
        Self {
            id_key: id_key.into(),
            amount_key: amount_key.into(),
        }
    }

    /// Returns the reference attribute name.
    pub fn id_key(&self) -> &str {
        &self.id_key
    }

    /// Returns the amount attribute name.
    pub fn amount_key(&self) -> &str {
        &self.amount_key
    }

    /// Returns a copy with the reference attribute replaced.
    pub fn with_id_key(mut self, id_key: impl Into<String>) -> Self {
        self.id_key = id_key.into();
        self
    }

    /// Returns a copy with the amount attribute replaced.
    pub fn with_amount_key(mut self, amount_key: impl Into<String>) -> Self {
        self.amount_key = amount_key.into();
        self
    }
}

impl Default for BomKeys {
    fn default() -> Self {
        Self::new(DEFAULT_ID_KEY, DEFAULT_AMOUNT_KEY)
    }
}

fn default_id_key() -> String {
    DEFAULT_ID_KEY.to_string()
}

fn default_amount_key() -> String {
    DEFAULT_AMOUNT_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = BomKeys::default();
        assert_eq!(keys.id_key(), "BOM_ID");
        assert_eq!(keys.amount_key(), "BOM_AMOUNT");
    }

    #[test]
    fn test_with_overrides() {
        let keys = BomKeys::default()
            .with_id_key("PART")
            .with_amount_key("QTY");
        assert_eq!(keys, BomKeys::new("PART", "QTY"));
    }
}
