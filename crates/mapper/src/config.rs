//! Mapper configuration
//!
//! The conversion schema is an explicit choice, not an implicit global:
//! the restricted [`ConversionSchema::Scalar`] mode supports only scalar
//! and set attribute types, while the default [`ConversionSchema::Document`]
//! mode adds lists, nested documents, booleans and explicit nulls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which native types the mapper supports when translating to and
/// from the store's attribute representation.
///
/// Key fields must be scalar under every schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSchema {
    /// Restricted mode: scalars and sets only. Booleans are encoded as
    /// numbers; lists and nested documents are rejected.
    Scalar,
    /// Rich mode: adds `L`, `M`, `Bool` and `Null` representations.
    #[default]
    Document,
}

impl ConversionSchema {
    /// Short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ConversionSchema::Scalar => "scalar",
            ConversionSchema::Document => "document",
        }
    }
}

impl fmt::Display for ConversionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a [`Mapper`](crate::Mapper)
///
/// # Example
///
/// ```
/// use tabledb_mapper::{ConversionSchema, MapperConfig};
///
/// let config = MapperConfig {
///     conversion_schema: ConversionSchema::Scalar,
///     ..MapperConfig::default()
/// };
/// assert_eq!(config.conversion_schema, ConversionSchema::Scalar);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Active conversion schema
    #[serde(default)]
    pub conversion_schema: ConversionSchema,
    /// Optional prefix applied to every declared table name, for
    /// namespacing several deployments onto one store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
}

impl MapperConfig {
    /// Resolve a declared table name against the configured prefix
    pub fn resolve_table(&self, declared: &str) -> String {
        match &self.table_prefix {
            Some(prefix) => format!("{prefix}{declared}"),
            None => declared.to_string(),
        }
    }
}
