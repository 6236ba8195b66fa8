//! Configuration types for BOM extraction.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`BomKeys`] - The attribute names that mark BOM shapes, under `[bom]`.
//!
//! # Example
//!
//! ```
//! # use drawbom::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.bom().id_key(), "BOM_ID");
//! assert_eq!(config.bom().amount_key(), "BOM_AMOUNT");
//! ```

use serde::Deserialize;

use drawbom_core::keys::BomKeys;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// BOM attribute names.
    #[serde(default)]
    bom: BomKeys,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given attribute names.
    pub fn new(bom: BomKeys) -> Self {
        Self { bom }
    }

    /// Returns the BOM attribute names.
    pub fn bom(&self) -> &BomKeys {
        &self.bom
    }

    /// Replaces the BOM attribute names.
    pub fn with_bom(mut self, bom: BomKeys) -> Self {
        self.bom = bom;
        self
    }

    /// Checks that the configuration can be used for extraction.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.bom.id_key().is_empty() {
            return Err("bom.id_key must not be empty".to_string());
        }
        if self.bom.amount_key().is_empty() {
            return Err("bom.amount_key must not be empty".to_string());
        }
        if self.bom.id_key() == self.bom.amount_key() {
            return Err(format!(
                "bom.id_key and bom.amount_key must differ, both are `{}`",
                self.bom.id_key()
            ));
        }
        Ok(())
    }
}
