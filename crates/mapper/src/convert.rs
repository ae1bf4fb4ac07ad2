//! Attribute conversion between field values and store attributes
//!
//! Runs strictly after shape validation accepts the descriptor. Marshaling
//! is driven by the value; unmarshaling is driven by the field's declared
//! tag, so out-of-band data that disagrees with the declaration fails here
//! at load time.
//!
//! ## Schema differences
//!
//! | native       | scalar schema | document schema |
//! |--------------|---------------|-----------------|
//! | `Bool`       | `N("0"/"1")`  | `Bool`          |
//! | `List`       | rejected      | `L`             |
//! | `Document`   | rejected      | `M`             |
//! | everything else is identical across schemas          |

use std::collections::HashMap;

use tabledb_core::AttrValue;

use crate::config::ConversionSchema;
use crate::error::{MappingError, Result};
use crate::schema::{FieldValue, TypeTag};

/// Marshal a field value into the store's representation
///
/// `Absent` marshals to `Null`; callers skip absent values before storing,
/// so this arm only serves nested positions under the document schema.
pub(crate) fn marshal(
    field: &'static str,
    value: FieldValue,
    schema: ConversionSchema,
) -> Result<AttrValue> {
    match value {
        FieldValue::Absent => Ok(AttrValue::Null),
        FieldValue::Bool(b) => Ok(match schema {
            ConversionSchema::Scalar => AttrValue::N(if b { "1" } else { "0" }.to_string()),
            ConversionSchema::Document => AttrValue::Bool(b),
        }),
        FieldValue::Int(i) => Ok(AttrValue::N(i.to_string())),
        FieldValue::Float(f) => Ok(AttrValue::N(f.to_string())),
        FieldValue::Str(s) => Ok(AttrValue::S(s)),
        FieldValue::Bytes(b) => Ok(AttrValue::B(b)),
        FieldValue::StrSet(s) => Ok(AttrValue::SS(s)),
        FieldValue::NumSet(s) => Ok(AttrValue::NS(s.iter().map(ToString::to_string).collect())),
        FieldValue::List(elements) => match schema {
            ConversionSchema::Scalar => Err(MappingError::UnsupportedAttributeType {
                field,
                tag: TypeTag::List,
                schema,
            }),
            ConversionSchema::Document => Ok(AttrValue::L(
                elements
                    .into_iter()
                    .map(|e| marshal(field, e, schema))
                    .collect::<Result<_>>()?,
            )),
        },
        FieldValue::Document(entries) => match schema {
            ConversionSchema::Scalar => Err(MappingError::UnsupportedAttributeType {
                field,
                tag: TypeTag::Document,
                schema,
            }),
            ConversionSchema::Document => Ok(AttrValue::M(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, marshal(field, v, schema)?)))
                    .collect::<Result<_>>()?,
            )),
        },
    }
}

/// Unmarshal a stored attribute into the field's declared type
pub(crate) fn unmarshal(field: &str, value: &AttrValue, tag: TypeTag) -> Result<FieldValue> {
    match tag {
        TypeTag::Int => parse_number(field, value, tag, |payload| {
            payload.parse::<i64>().ok().map(FieldValue::Int)
        }),
        TypeTag::Float => parse_number(field, value, tag, |payload| {
            payload.parse::<f64>().ok().map(FieldValue::Float)
        }),
        TypeTag::Str => match value {
            AttrValue::S(s) => Ok(FieldValue::Str(s.clone())),
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::Bool => match value {
            AttrValue::Bool(b) => Ok(FieldValue::Bool(*b)),
            // The scalar schema stores booleans as numbers.
            AttrValue::N(n) if n == "1" => Ok(FieldValue::Bool(true)),
            AttrValue::N(n) if n == "0" => Ok(FieldValue::Bool(false)),
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::Bytes => match value {
            AttrValue::B(b) => Ok(FieldValue::Bytes(b.clone())),
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::StrSet => match value {
            AttrValue::SS(ss) => Ok(FieldValue::StrSet(ss.clone())),
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::NumSet => match value {
            AttrValue::NS(ns) => {
                let parsed: Option<Vec<i64>> =
                    ns.iter().map(|n| n.parse::<i64>().ok()).collect();
                parsed
                    .map(FieldValue::NumSet)
                    .ok_or_else(|| unparseable(field, tag))
            }
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::List => match value {
            AttrValue::L(elements) => Ok(FieldValue::List(
                elements
                    .iter()
                    .map(|e| unmarshal_untagged(field, e))
                    .collect::<Result<_>>()?,
            )),
            other => Err(mismatch(field, tag, other)),
        },
        TypeTag::Document => match value {
            AttrValue::M(entries) => Ok(FieldValue::Document(unmarshal_entries(field, entries)?)),
            other => Err(mismatch(field, tag, other)),
        },
    }
}

/// Unmarshal a nested value with no declared tag to guide it
///
/// Numbers become `Int` when the payload parses as one, `Float` otherwise.
fn unmarshal_untagged(field: &str, value: &AttrValue) -> Result<FieldValue> {
    match value {
        AttrValue::S(s) => Ok(FieldValue::Str(s.clone())),
        AttrValue::N(n) => {
            if let Ok(i) = n.parse::<i64>() {
                Ok(FieldValue::Int(i))
            } else if let Ok(f) = n.parse::<f64>() {
                Ok(FieldValue::Float(f))
            } else {
                Err(unparseable(field, TypeTag::Float))
            }
        }
        AttrValue::B(b) => Ok(FieldValue::Bytes(b.clone())),
        AttrValue::Bool(b) => Ok(FieldValue::Bool(*b)),
        AttrValue::Null => Ok(FieldValue::Absent),
        AttrValue::SS(ss) => Ok(FieldValue::StrSet(ss.clone())),
        AttrValue::NS(ns) => {
            let parsed: Option<Vec<i64>> = ns.iter().map(|n| n.parse::<i64>().ok()).collect();
            parsed
                .map(FieldValue::NumSet)
                .ok_or_else(|| unparseable(field, TypeTag::NumSet))
        }
        AttrValue::L(elements) => Ok(FieldValue::List(
            elements
                .iter()
                .map(|e| unmarshal_untagged(field, e))
                .collect::<Result<_>>()?,
        )),
        AttrValue::M(entries) => Ok(FieldValue::Document(unmarshal_entries(field, entries)?)),
    }
}

fn unmarshal_entries(
    field: &str,
    entries: &HashMap<String, AttrValue>,
) -> Result<HashMap<String, FieldValue>> {
    entries
        .iter()
        .map(|(k, v)| Ok((k.clone(), unmarshal_untagged(field, v)?)))
        .collect()
}

fn parse_number(
    field: &str,
    value: &AttrValue,
    tag: TypeTag,
    parse: impl Fn(&str) -> Option<FieldValue>,
) -> Result<FieldValue> {
    match value {
        AttrValue::N(payload) => parse(payload).ok_or_else(|| unparseable(field, tag)),
        other => Err(mismatch(field, tag, other)),
    }
}

fn mismatch(field: &str, expected: TypeTag, found: &AttrValue) -> MappingError {
    MappingError::AttributeTypeMismatch {
        field: field.to_string(),
        expected,
        found: found.type_name().to_string(),
    }
}

fn unparseable(field: &str, expected: TypeTag) -> MappingError {
    MappingError::AttributeTypeMismatch {
        field: field.to_string(),
        expected,
        found: "unparseable N payload".to_string(),
    }
}
