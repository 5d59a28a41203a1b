//! Serializers for the merged property table.
//!
//! - **JSON** ([`json`]) — an array of property objects, field order preserved
pub mod json;
