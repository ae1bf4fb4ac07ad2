//! Mapper: typed save/load/delete over the item store
//!
//! ## Design
//!
//! The mapper is a stateless facade over an [`ItemStore`] handle plus a
//! [`MapperConfig`]. Each operation validates the type's descriptor first
//! (see `schema::validate`), so structural faults surface before any store
//! call, then converts between field values and attributes.
//!
//! ## Failure policy
//!
//! Every violation is reported synchronously as a [`MappingError`]; a
//! failed operation stores nothing and returns no partial result.

use tracing::{debug, warn};
use uuid::Uuid;

use tabledb_core::{AttrValue, Item};
use tabledb_store::{Expectation, ItemStore, StoreError};

use crate::config::MapperConfig;
use crate::convert;
use crate::error::{MappingError, Result};
use crate::schema::{validate, FieldDescriptor, FieldValue, Mappable, TypeDescriptor, TypeTag};

/// Typed object mapper over the item store
///
/// Cheap to clone; clones share the underlying store.
///
/// # Example
///
/// ```
/// use once_cell::sync::Lazy;
/// use tabledb_mapper::schema::{
///     FieldDescriptor, FieldValue, Mappable, TypeDescriptor, TypeTag,
/// };
/// use tabledb_mapper::Mapper;
/// use tabledb_store::{ItemStore, KeySchema};
///
/// #[derive(Default)]
/// struct Order {
///     id: Option<String>,
///     total: Option<i64>,
/// }
///
/// impl Mappable for Order {
///     fn descriptor() -> &'static TypeDescriptor<Self> {
///         static DESC: Lazy<TypeDescriptor<Order>> = Lazy::new(|| {
///             TypeDescriptor::new("Order")
///                 .table("orders")
///                 .constructor(Order::default)
///                 .field(
///                     FieldDescriptor::hash_key("id", TypeTag::Str)
///                         .getter(|o: &Order| FieldValue::from_option(o.id.clone()))
///                         .setter(|o: &mut Order, v| o.id = v.into_string()),
///                 )
///                 .field(
///                     FieldDescriptor::attribute("total", TypeTag::Int)
///                         .getter(|o: &Order| FieldValue::from_option(o.total))
///                         .setter(|o: &mut Order, v| o.total = v.into_int()),
///                 )
///         });
///         &DESC
///     }
/// }
///
/// let store = ItemStore::new();
/// store.create_table("orders", KeySchema::hash("id")).unwrap();
/// let mapper = Mapper::new(store);
///
/// let mut order = Order {
///     id: Some("o-1".into()),
///     total: Some(250),
/// };
/// mapper.save(&mut order).unwrap();
///
/// let loaded: Order = mapper.load("o-1").unwrap().unwrap();
/// assert_eq!(loaded.total, Some(250));
/// ```
#[derive(Clone)]
pub struct Mapper {
    store: ItemStore,
    config: MapperConfig,
}

impl Mapper {
    /// Mapper with the default configuration
    pub fn new(store: ItemStore) -> Self {
        Self::with_config(store, MapperConfig::default())
    }

    /// Mapper with an explicit configuration
    pub fn with_config(store: ItemStore, config: MapperConfig) -> Self {
        Self { store, config }
    }

    /// Active configuration
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Persist an instance
    ///
    /// Validates the descriptor, assigns absent auto-generated string keys
    /// (written back through the setter), increments the version attribute
    /// under an optimistic guard, and stores the marshaled item. Absent
    /// attribute values are not stored.
    pub fn save<T: Mappable>(&self, obj: &mut T) -> Result<()> {
        let desc = T::descriptor();
        let schema = self.config.conversion_schema;
        validate::check_save(desc, schema)?;
        let table = self.resolve_table(desc)?;

        let mut item = Item::new();
        let mut guards = Vec::new();

        for field in desc.key_fields() {
            let value = self.key_value_for_save(desc, field, obj)?;
            item.insert(
                field.name().to_string(),
                convert::marshal(field.name(), value, schema)?,
            );
        }

        if let Some(field) = desc.version() {
            let current = read_required(desc, field, obj)?;
            let next = match current {
                FieldValue::Absent => {
                    guards.push(Expectation::absent(field.name()));
                    1
                }
                FieldValue::Int(n) => {
                    guards.push(Expectation::eq(field.name(), AttrValue::N(n.to_string())));
                    n + 1
                }
                other => {
                    return Err(MappingError::AttributeTypeMismatch {
                        field: field.name().to_string(),
                        expected: TypeTag::Int,
                        found: other.type_name().to_string(),
                    })
                }
            };
            field.write(desc.type_name(), obj, FieldValue::Int(next))?;
            item.insert(field.name().to_string(), AttrValue::N(next.to_string()));
        }

        for field in desc.attributes() {
            // Fields without a public getter are invisible to the save path.
            let Some(value) = field.read(obj) else { continue };
            if value.is_absent() {
                continue;
            }
            item.insert(
                field.name().to_string(),
                convert::marshal(field.name(), value, schema)?,
            );
        }

        debug!(
            target: "tabledb::mapper",
            type_name = desc.type_name(),
            table = %table,
            attributes = item.len(),
            "saving instance"
        );
        match (self.store.put_item_expecting(&table, item, &guards), desc.version()) {
            (Err(StoreError::ConditionFailed { .. }), Some(field)) => {
                Err(MappingError::VersionConflict {
                    type_name: desc.type_name(),
                    field: field.name(),
                })
            }
            (Err(other), _) => Err(other.into()),
            (Ok(()), _) => Ok(()),
        }
    }

    /// Load an instance by hash key
    ///
    /// Returns `Ok(None)` when no item is stored under the key.
    pub fn load<T, K>(&self, hash_key: K) -> Result<Option<T>>
    where
        T: Mappable,
        K: Into<FieldValue>,
    {
        self.load_inner(hash_key.into(), None)
    }

    /// Load an instance by hash and range key
    pub fn load_with_range<T, H, R>(&self, hash_key: H, range_key: R) -> Result<Option<T>>
    where
        T: Mappable,
        H: Into<FieldValue>,
        R: Into<FieldValue>,
    {
        self.load_inner(hash_key.into(), Some(range_key.into()))
    }

    /// Delete the item an instance is stored under; returns whether it existed
    pub fn delete<T: Mappable>(&self, obj: &T) -> Result<bool> {
        let desc = T::descriptor();
        validate::check_load(desc)?;
        let table = self.resolve_table(desc)?;

        let hash_field = desc.hash_key().ok_or(MappingError::MissingHashKey {
            type_name: desc.type_name(),
        })?;
        let hash_attr = {
            let value = read_required(desc, hash_field, obj)?;
            self.key_attr(desc, hash_field, value)?
        };
        let range_attr = match desc.range_key() {
            Some(field) => {
                let value = read_required(desc, field, obj)?;
                Some(self.key_attr(desc, field, value)?)
            }
            None => None,
        };

        debug!(target: "tabledb::mapper", type_name = desc.type_name(), table = %table, "deleting instance");
        Ok(self.store.delete_item(&table, &hash_attr, range_attr.as_ref())?)
    }

    fn load_inner<T: Mappable>(
        &self,
        hash_key: FieldValue,
        range_key: Option<FieldValue>,
    ) -> Result<Option<T>> {
        let desc = T::descriptor();
        validate::check_load(desc)?;
        let table = self.resolve_table(desc)?;

        let hash_field = desc.hash_key().ok_or(MappingError::MissingHashKey {
            type_name: desc.type_name(),
        })?;
        let hash_attr = self.key_attr(desc, hash_field, hash_key)?;
        let range_attr = match (desc.range_key(), range_key) {
            (Some(field), Some(value)) => Some(self.key_attr(desc, field, value)?),
            (Some(field), None) => {
                return Err(MappingError::MissingKeyValue {
                    type_name: desc.type_name(),
                    field: field.name(),
                })
            }
            (None, Some(_)) => {
                warn!(
                    target: "tabledb::mapper",
                    type_name = desc.type_name(),
                    "range key supplied but type declares none; ignoring"
                );
                None
            }
            (None, None) => None,
        };

        let Some(stored) = self.store.get_item(&table, &hash_attr, range_attr.as_ref())? else {
            return Ok(None);
        };

        let mut obj = desc.construct().ok_or(MappingError::NoDefaultConstructor {
            type_name: desc.type_name(),
        })?;
        for (name, attr) in &stored {
            let Some(field) = desc.field_named(name) else {
                warn!(
                    target: "tabledb::mapper",
                    type_name = desc.type_name(),
                    attribute = %name,
                    "stored attribute has no mapped field; skipping"
                );
                continue;
            };
            let value = convert::unmarshal(name, attr, field.type_tag())?;
            field.write(desc.type_name(), &mut obj, value)?;
        }
        Ok(Some(obj))
    }

    /// Resolve a key field's save-time value, generating one if permitted
    fn key_value_for_save<T>(
        &self,
        desc: &TypeDescriptor<T>,
        field: &FieldDescriptor<T>,
        obj: &mut T,
    ) -> Result<FieldValue> {
        let value = read_required(desc, field, obj)?;
        if !value.is_absent() {
            return Ok(value);
        }
        if !field.is_auto_generated() {
            return Err(MappingError::MissingKeyValue {
                type_name: desc.type_name(),
                field: field.name(),
            });
        }
        // Only string keys are generable.
        if field.type_tag() != TypeTag::Str {
            return Err(MappingError::KeyGeneration {
                type_name: desc.type_name(),
                field: field.name(),
                tag: field.type_tag(),
            });
        }
        let generated = Uuid::new_v4().to_string();
        debug!(
            target: "tabledb::mapper",
            type_name = desc.type_name(),
            field = field.name(),
            "generated key value"
        );
        field.write(desc.type_name(), obj, FieldValue::Str(generated.clone()))?;
        Ok(FieldValue::Str(generated))
    }

    /// Marshal a supplied key value, checking it against the declared tag
    fn key_attr<T>(
        &self,
        desc: &TypeDescriptor<T>,
        field: &FieldDescriptor<T>,
        value: FieldValue,
    ) -> Result<AttrValue> {
        if value.is_absent() {
            return Err(MappingError::MissingKeyValue {
                type_name: desc.type_name(),
                field: field.name(),
            });
        }
        if !value.matches_tag(field.type_tag()) {
            return Err(MappingError::AttributeTypeMismatch {
                field: field.name().to_string(),
                expected: field.type_tag(),
                found: value.type_name().to_string(),
            });
        }
        convert::marshal(field.name(), value, self.config.conversion_schema)
    }

    fn resolve_table<T>(&self, desc: &TypeDescriptor<T>) -> Result<String> {
        desc.table_name()
            .map(|declared| self.config.resolve_table(declared))
            .ok_or(MappingError::MissingTable {
                type_name: desc.type_name(),
            })
    }
}

/// Read a field the current operation cannot proceed without
fn read_required<T>(
    desc: &TypeDescriptor<T>,
    field: &FieldDescriptor<T>,
    obj: &T,
) -> Result<FieldValue> {
    field.read(obj).ok_or(MappingError::InaccessibleGetter {
        type_name: desc.type_name(),
        field: field.name(),
    })
}
