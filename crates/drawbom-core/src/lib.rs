//! drawbom Core Types and Aggregation
//!
//! This crate provides the foundational types for drawbom bills of
//! materials. It includes:
//!
//! - **Amounts**: Integer-or-real quantities ([`amount::Amount`])
//! - **Records**: Raw per-shape records and aggregated items ([`record`] module)
//! - **Keys**: The attribute names that mark BOM shapes ([`keys::BomKeys`])
//! - **Aggregation**: Grouping and summing records by reference ([`aggregate`] module)

pub mod aggregate;
pub mod amount;
pub mod keys;
pub mod record;
