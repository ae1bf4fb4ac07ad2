//! Typed values and type tags at the accessor boundary
//!
//! [`FieldValue`] is what getters produce and setters consume; the mapper
//! converts between it and the store's `AttrValue` in the conversion
//! layer. [`TypeTag`] names the declared type of a field, independent of
//! any particular value.

use std::collections::HashMap;
use std::fmt;

/// Declared type of a mapped field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// UTF-8 string
    Str,
    /// Raw bytes
    Bytes,
    /// Set of strings
    StrSet,
    /// Set of integers
    NumSet,
    /// Ordered list of values
    List,
    /// Nested document
    Document,
}

impl TypeTag {
    /// Get the tag name as a string
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Bool => "Bool",
            TypeTag::Int => "Int",
            TypeTag::Float => "Float",
            TypeTag::Str => "Str",
            TypeTag::Bytes => "Bytes",
            TypeTag::StrSet => "StrSet",
            TypeTag::NumSet => "NumSet",
            TypeTag::List => "List",
            TypeTag::Document => "Document",
        }
    }

    /// Whether this tag names a scalar type (usable as a key)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TypeTag::Bool | TypeTag::Int | TypeTag::Float | TypeTag::Str | TypeTag::Bytes
        )
    }

    /// Whether this tag names an integral numeric type
    pub fn is_integral(&self) -> bool {
        matches!(self, TypeTag::Int)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role a field plays in the mapped type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Primary partition key; exactly one per mappable type
    HashKey,
    /// Optional secondary key component
    RangeKey,
    /// Optimistic-concurrency counter
    Version,
    /// Ordinary attribute
    Attribute,
}

/// Declared visibility of an accessor
///
/// The descriptor records the visibility a field's accessors were declared
/// with; the mapper only ever invokes public accessors, exactly as the
/// reflective original only discovered public methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Accessible to the mapper
    Public,
    /// Declared, but not accessible to the mapper
    Private,
}

impl Visibility {
    /// Whether the mapper may invoke this accessor
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A field's value as it crosses the accessor boundary
///
/// `Absent` stands for an unset field (`None` in the mapped type); absent
/// attributes are not stored, and an absent key is an error unless the key
/// is auto-generated.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Unset field
    Absent,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Set of strings
    StrSet(Vec<String>),
    /// Set of integers
    NumSet(Vec<i64>),
    /// Ordered list of values
    List(Vec<FieldValue>),
    /// Nested document
    Document(HashMap<String, FieldValue>),
}

impl FieldValue {
    /// Check if this is the absent marker
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Absent => "Absent",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Int(_) => "Int",
            FieldValue::Float(_) => "Float",
            FieldValue::Str(_) => "Str",
            FieldValue::Bytes(_) => "Bytes",
            FieldValue::StrSet(_) => "StrSet",
            FieldValue::NumSet(_) => "NumSet",
            FieldValue::List(_) => "List",
            FieldValue::Document(_) => "Document",
        }
    }

    /// Whether this value is an inhabitant of the given tag
    ///
    /// `Absent` inhabits no tag.
    pub fn matches_tag(&self, tag: TypeTag) -> bool {
        matches!(
            (self, tag),
            (FieldValue::Bool(_), TypeTag::Bool)
                | (FieldValue::Int(_), TypeTag::Int)
                | (FieldValue::Float(_), TypeTag::Float)
                | (FieldValue::Str(_), TypeTag::Str)
                | (FieldValue::Bytes(_), TypeTag::Bytes)
                | (FieldValue::StrSet(_), TypeTag::StrSet)
                | (FieldValue::NumSet(_), TypeTag::NumSet)
                | (FieldValue::List(_), TypeTag::List)
                | (FieldValue::Document(_), TypeTag::Document)
        )
    }

    /// Lift an optional native value, mapping `None` to `Absent`
    pub fn from_option<V: Into<FieldValue>>(value: Option<V>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }

    /// Extract a string, if this is a `Str` value
    pub fn into_string(self) -> Option<String> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract an integer, if this is an `Int` value
    pub fn into_int(self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Extract a float, if this is a `Float` value
    pub fn into_float(self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Extract a boolean, if this is a `Bool` value
    pub fn into_bool(self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Extract a string list, if this is a `StrSet` value
    pub fn into_str_set(self) -> Option<Vec<String>> {
        match self {
            FieldValue::StrSet(s) => Some(s),
            _ => None,
        }
    }

    /// Extract an integer list, if this is a `NumSet` value
    pub fn into_num_set(self) -> Option<Vec<i64>> {
        match self {
            FieldValue::NumSet(s) => Some(s),
            _ => None,
        }
    }

    /// Extract list elements, if this is a `List` value
    pub fn into_list(self) -> Option<Vec<FieldValue>> {
        match self {
            FieldValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Extract document entries, if this is a `Document` value
    pub fn into_document(self) -> Option<HashMap<String, FieldValue>> {
        match self {
            FieldValue::Document(d) => Some(d),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic getters
// ============================================================================

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(s: Vec<String>) -> Self {
        FieldValue::StrSet(s)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(s: Vec<i64>) -> Self {
        FieldValue::NumSet(s)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(l: Vec<FieldValue>) -> Self {
        FieldValue::List(l)
    }
}

impl From<HashMap<String, FieldValue>> for FieldValue {
    fn from(d: HashMap<String, FieldValue>) -> Self {
        FieldValue::Document(d)
    }
}
