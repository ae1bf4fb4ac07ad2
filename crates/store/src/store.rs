//! ItemStore: in-memory storage backend with a table registry
//!
//! This module implements the item API the mapper is layered on:
//! - `HashMap<String, Table>` registry behind a `parking_lot::RwLock`
//! - Items indexed by the scalar projection of their key attributes
//! - Conditional writes via per-attribute [`Expectation`] guards
//!
//! # Design Notes
//!
//! - **No version history**: each key stores only its latest item
//! - **Whole-item writes**: `put_item` replaces the stored item; there is
//!   no attribute-level patching
//! - **Guards evaluate before the write**: a failed expectation leaves the
//!   table untouched

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use tabledb_core::{AttrValue, Item};

use crate::error::{Result, StoreError};
use crate::key::{ItemKey, KeySchema, KeyValue};

/// Per-attribute guard for conditional writes
///
/// Mirrors the expected-value clause of a put-item call: an attribute must
/// currently be absent, or must currently equal a given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The attribute must not exist on the stored item (or the item itself
    /// must not exist)
    Absent {
        /// Guarded attribute name
        attribute: String,
    },
    /// The attribute must exist and equal `value`
    Eq {
        /// Guarded attribute name
        attribute: String,
        /// Required current value
        value: AttrValue,
    },
}

impl Expectation {
    /// Guard requiring `attribute` to be absent
    pub fn absent(attribute: impl Into<String>) -> Self {
        Expectation::Absent {
            attribute: attribute.into(),
        }
    }

    /// Guard requiring `attribute` to equal `value`
    pub fn eq(attribute: impl Into<String>, value: AttrValue) -> Self {
        Expectation::Eq {
            attribute: attribute.into(),
            value,
        }
    }

    /// Name of the guarded attribute
    pub fn attribute(&self) -> &str {
        match self {
            Expectation::Absent { attribute } | Expectation::Eq { attribute, .. } => attribute,
        }
    }

    fn holds(&self, existing: Option<&Item>) -> bool {
        match self {
            Expectation::Absent { attribute } => {
                existing.map_or(true, |item| !item.contains_key(attribute))
            }
            Expectation::Eq { attribute, value } => {
                existing.and_then(|item| item.get(attribute)) == Some(value)
            }
        }
    }
}

struct Table {
    schema: KeySchema,
    items: HashMap<ItemKey, Item>,
}

/// In-memory item store with explicit table creation
///
/// Cheap to clone; clones share the same tables. All operations are
/// synchronous and atomic with respect to one another.
///
/// # Example
///
/// ```
/// use tabledb_store::{ItemStore, KeySchema};
/// use tabledb_core::{AttrValue, Item};
///
/// let store = ItemStore::new();
/// store.create_table("users", KeySchema::hash("id")).unwrap();
///
/// let mut item = Item::new();
/// item.insert("id".to_string(), AttrValue::S("u1".into()));
/// item.insert("name".to_string(), AttrValue::S("Alice".into()));
/// store.put_item("users", item).unwrap();
///
/// let found = store.get_item("users", &AttrValue::S("u1".into()), None).unwrap();
/// assert!(found.is_some());
/// ```
#[derive(Clone, Default)]
pub struct ItemStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl ItemStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table with the given key schema
    pub fn create_table(&self, name: &str, schema: KeySchema) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.contains_key(name) {
            return Err(StoreError::TableExists(name.to_string()));
        }
        debug!(target: "tabledb::store", table = name, hash_key = %schema.hash_key, "table created");
        tables.insert(
            name.to_string(),
            Table {
                schema,
                items: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Store an item, replacing any existing item with the same key
    pub fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.put_item_expecting(table, item, &[])
    }

    /// Store an item if every expectation holds against the current state
    ///
    /// On a failed expectation, returns [`StoreError::ConditionFailed`] and
    /// writes nothing.
    pub fn put_item_expecting(
        &self,
        table: &str,
        item: Item,
        expected: &[Expectation],
    ) -> Result<()> {
        let mut tables = self.tables.write();
        let t = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = Self::key_of_item(table, &t.schema, &item)?;

        let existing = t.items.get(&key);
        for expectation in expected {
            if !expectation.holds(existing) {
                debug!(
                    target: "tabledb::store",
                    table,
                    attribute = expectation.attribute(),
                    "conditional put rejected"
                );
                return Err(StoreError::ConditionFailed {
                    attribute: expectation.attribute().to_string(),
                });
            }
        }

        debug!(target: "tabledb::store", table, attributes = item.len(), "item stored");
        t.items.insert(key, item);
        Ok(())
    }

    /// Fetch an item by hash key and optional range key
    pub fn get_item(
        &self,
        table: &str,
        hash_key: &AttrValue,
        range_key: Option<&AttrValue>,
    ) -> Result<Option<Item>> {
        let tables = self.tables.read();
        let t = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = Self::lookup_key(table, &t.schema, hash_key, range_key)?;
        Ok(t.items.get(&key).cloned())
    }

    /// Delete an item; returns whether it existed
    pub fn delete_item(
        &self,
        table: &str,
        hash_key: &AttrValue,
        range_key: Option<&AttrValue>,
    ) -> Result<bool> {
        let mut tables = self.tables.write();
        let t = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = Self::lookup_key(table, &t.schema, hash_key, range_key)?;
        let removed = t.items.remove(&key).is_some();
        if removed {
            debug!(target: "tabledb::store", table, "item deleted");
        }
        Ok(removed)
    }

    /// Number of items currently stored in a table
    pub fn item_count(&self, table: &str) -> Result<usize> {
        let tables = self.tables.read();
        let t = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        Ok(t.items.len())
    }

    fn key_of_item(table: &str, schema: &KeySchema, item: &Item) -> Result<ItemKey> {
        let hash_attr =
            item.get(&schema.hash_key)
                .ok_or_else(|| StoreError::MissingKeyAttribute {
                    table: table.to_string(),
                    attribute: schema.hash_key.clone(),
                })?;
        let hash = KeyValue::try_from_attr(&schema.hash_key, hash_attr)?;

        let range = match &schema.range_key {
            Some(name) => {
                let attr = item
                    .get(name)
                    .ok_or_else(|| StoreError::MissingKeyAttribute {
                        table: table.to_string(),
                        attribute: name.clone(),
                    })?;
                Some(KeyValue::try_from_attr(name, attr)?)
            }
            None => None,
        };
        Ok((hash, range))
    }

    fn lookup_key(
        table: &str,
        schema: &KeySchema,
        hash_key: &AttrValue,
        range_key: Option<&AttrValue>,
    ) -> Result<ItemKey> {
        let hash = KeyValue::try_from_attr(&schema.hash_key, hash_key)?;
        let range = match (&schema.range_key, range_key) {
            (Some(name), Some(attr)) => Some(KeyValue::try_from_attr(name, attr)?),
            (Some(name), None) => {
                return Err(StoreError::MissingKeyAttribute {
                    table: table.to_string(),
                    attribute: name.clone(),
                })
            }
            (None, _) => None,
        };
        Ok((hash, range))
    }
}
