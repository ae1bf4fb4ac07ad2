//! Key schemas and key projection for the item store
//!
//! A table is created with a [`KeySchema`] naming its hash key attribute
//! and, optionally, a range key attribute. Items are indexed by the
//! [`KeyValue`] projection of those attributes.
//!
//! ## Contract
//!
//! - Key attributes must be scalar: `S`, `N` or `B`. `Bool` is scalar in
//!   the value model but is not accepted as a table key.
//! - Range keys are optional; when declared, every item must carry one.

use serde::{Deserialize, Serialize};
use tabledb_core::AttrValue;

use crate::error::StoreError;

/// Key declaration for a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySchema {
    /// Name of the hash key attribute
    pub hash_key: String,
    /// Name of the range key attribute, if the table has a composite key
    pub range_key: Option<String>,
}

impl KeySchema {
    /// Hash-key-only schema
    pub fn hash(hash_key: impl Into<String>) -> Self {
        Self {
            hash_key: hash_key.into(),
            range_key: None,
        }
    }

    /// Composite hash + range schema
    pub fn with_range(hash_key: impl Into<String>, range_key: impl Into<String>) -> Self {
        Self {
            hash_key: hash_key.into(),
            range_key: Some(range_key.into()),
        }
    }
}

/// Hashable scalar projection of an [`AttrValue`], used to index items
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
    /// String key
    S(String),
    /// Number key, in transport form
    N(String),
    /// Binary key
    B(Vec<u8>),
}

impl KeyValue {
    /// Project an attribute into a key, rejecting non-indexable forms
    pub fn try_from_attr(attribute: &str, value: &AttrValue) -> Result<Self, StoreError> {
        match value {
            AttrValue::S(s) => Ok(KeyValue::S(s.clone())),
            AttrValue::N(n) => Ok(KeyValue::N(n.clone())),
            AttrValue::B(b) => Ok(KeyValue::B(b.clone())),
            other => Err(StoreError::InvalidKeyAttribute {
                attribute: attribute.to_string(),
                found: other.type_name(),
            }),
        }
    }
}

impl From<KeyValue> for AttrValue {
    fn from(k: KeyValue) -> Self {
        match k {
            KeyValue::S(s) => AttrValue::S(s),
            KeyValue::N(n) => AttrValue::N(n),
            KeyValue::B(b) => AttrValue::B(b),
        }
    }
}

/// Composite item key: hash key plus optional range key
pub(crate) type ItemKey = (KeyValue, Option<KeyValue>);
