//! Attribute values for TableDB
//!
//! This module defines:
//! - AttrValue: the store's native representation of a single attribute
//! - Item: a named collection of attributes, the unit the store persists
//!
//! ## Representation Rules
//!
//! - **ATTR-1**: Numbers travel in string form (`N("42")`). The store never
//!   interprets numeric payloads; parsing happens in the mapper's
//!   conversion layer.
//! - **ATTR-2**: No implicit coercions. `S("1")`, `N("1")` and `Bool(true)`
//!   are three distinct values.
//! - **ATTR-3**: Sets (`SS`, `NS`) are ordered as supplied; the store does
//!   not deduplicate or sort them.
//! - **ATTR-4**: `L` and `M` may nest arbitrarily.
//!
//! Equality is structural. Because numbers are strings here, `N("1")` and
//! `N("1.0")` are NOT equal at this layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named collection of attributes, as stored and returned by the item store.
pub type Item = HashMap<String, AttrValue>;

/// Native attribute representation used by the item store.
///
/// The variant set mirrors a key-value item API: scalar strings, numbers
/// and binary payloads; string/number sets; and the document forms `L`
/// (list) and `M` (map) plus `Bool`/`Null`, which only the rich conversion
/// schema produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// UTF-8 string
    S(String),
    /// Number in transport (string) form
    N(String),
    /// Raw bytes
    B(Vec<u8>),
    /// Boolean
    Bool(bool),
    /// Explicit null
    Null,
    /// String set
    SS(Vec<String>),
    /// Number set, each element in transport form
    NS(Vec<String>),
    /// List of attribute values
    L(Vec<AttrValue>),
    /// Map of attribute values with string keys
    M(HashMap<String, AttrValue>),
}

impl AttrValue {
    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::S(_) => "S",
            AttrValue::N(_) => "N",
            AttrValue::B(_) => "B",
            AttrValue::Bool(_) => "Bool",
            AttrValue::Null => "Null",
            AttrValue::SS(_) => "SS",
            AttrValue::NS(_) => "NS",
            AttrValue::L(_) => "L",
            AttrValue::M(_) => "M",
        }
    }

    /// Check if this is a string value
    pub fn is_s(&self) -> bool {
        matches!(self, AttrValue::S(_))
    }

    /// Check if this is a number value
    pub fn is_n(&self) -> bool {
        matches!(self, AttrValue::N(_))
    }

    /// Check if this is a binary value
    pub fn is_b(&self) -> bool {
        matches!(self, AttrValue::B(_))
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, AttrValue::Bool(_))
    }

    /// Check if this is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Check if this is one of the scalar forms (`S`, `N`, `B`, `Bool`)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            AttrValue::S(_) | AttrValue::N(_) | AttrValue::B(_) | AttrValue::Bool(_)
        )
    }

    /// Get as &str if this is an `S` value
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttrValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number payload if this is an `N` value
    ///
    /// The payload is returned verbatim; the caller decides how to parse it.
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttrValue::N(n) => Some(n),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a `B` value
    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            AttrValue::B(b) => Some(b),
            _ => None,
        }
    }

    /// Get as bool if this is a `Bool` value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the elements if this is an `SS` value
    pub fn as_ss(&self) -> Option<&[String]> {
        match self {
            AttrValue::SS(ss) => Some(ss),
            _ => None,
        }
    }

    /// Get the elements if this is an `NS` value
    pub fn as_ns(&self) -> Option<&[String]> {
        match self {
            AttrValue::NS(ns) => Some(ns),
            _ => None,
        }
    }

    /// Get the elements if this is an `L` value
    pub fn as_l(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::L(l) => Some(l),
            _ => None,
        }
    }

    /// Get the entries if this is an `M` value
    pub fn as_m(&self) -> Option<&HashMap<String, AttrValue>> {
        match self {
            AttrValue::M(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::S(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::S(s)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::N(i.to_string())
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::N(i.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::N(f.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(b: Vec<u8>) -> Self {
        AttrValue::B(b)
    }
}

impl From<&[u8]> for AttrValue {
    fn from(b: &[u8]) -> Self {
        AttrValue::B(b.to_vec())
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(l: Vec<AttrValue>) -> Self {
        AttrValue::L(l)
    }
}

impl From<HashMap<String, AttrValue>> for AttrValue {
    fn from(m: HashMap<String, AttrValue>) -> Self {
        AttrValue::M(m)
    }
}

// ============================================================================
// serde_json interop for diagnostics and logging
// ============================================================================

impl From<AttrValue> for serde_json::Value {
    /// Project an attribute into plain JSON.
    ///
    /// Lossy: `N` payloads become JSON numbers when they parse (string
    /// otherwise), `B` becomes an array of byte values, and sets become
    /// plain arrays. Intended for diagnostics, not round-tripping.
    fn from(v: AttrValue) -> Self {
        match v {
            AttrValue::S(s) => serde_json::Value::String(s),
            AttrValue::N(n) => number_to_json(&n),
            AttrValue::B(b) => serde_json::Value::Array(
                b.into_iter().map(|byte| serde_json::Value::from(byte)).collect(),
            ),
            AttrValue::Bool(b) => serde_json::Value::Bool(b),
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::SS(ss) => serde_json::Value::Array(
                ss.into_iter().map(serde_json::Value::String).collect(),
            ),
            AttrValue::NS(ns) => {
                serde_json::Value::Array(ns.iter().map(|n| number_to_json(n)).collect())
            }
            AttrValue::L(l) => {
                serde_json::Value::Array(l.into_iter().map(serde_json::Value::from).collect())
            }
            AttrValue::M(m) => serde_json::Value::Object(
                m.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(payload: &str) -> serde_json::Value {
    if let Ok(i) = payload.parse::<i64>() {
        return serde_json::Value::Number(i.into());
    }
    if let Ok(f) = payload.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return serde_json::Value::Number(n);
        }
    }
    serde_json::Value::String(payload.to_string())
}
