//! Registration-time type descriptors
//!
//! A [`TypeDescriptor`] is the mapper's schema for one mapped type: the
//! table marker, the no-argument constructor used for reconstruction, and
//! one [`FieldDescriptor`] per mapped field. It replaces per-call
//! reflection: a type registers its descriptor once (see [`Mappable`]),
//! and the validator judges the descriptor the way the reflective
//! original judged method signatures.
//!
//! The descriptor records accessors as declared, including shapes the
//! mapper must reject: a private getter, a setter with the wrong declared
//! parameter count, a setter whose parameter type disagrees with the
//! getter. Rejection is the validator's job, not the builder's.

use crate::error::{MappingError, Result};
use crate::schema::{FieldRole, FieldValue, TypeTag, Visibility};

/// A type the mapper can persist, by way of its registered descriptor
///
/// Descriptors are built once per type, typically behind
/// `once_cell::sync::Lazy`:
///
/// ```
/// use once_cell::sync::Lazy;
/// use tabledb_mapper::schema::{
///     FieldDescriptor, FieldValue, Mappable, TypeDescriptor, TypeTag,
/// };
///
/// #[derive(Default)]
/// struct Order {
///     id: Option<String>,
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
///         });
///         &DESC
///     }
/// }
/// ```
pub trait Mappable: Sized + 'static {
    /// The registered descriptor for this type
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

/// A field's getter, as declared
pub struct Accessor<T> {
    visibility: Visibility,
    read: fn(&T) -> FieldValue,
}

/// A field's setter, as declared
///
/// `param_count` and `param` describe the declared signature; a count
/// other than one or a parameter type disagreeing with the getter's
/// return type makes the field unmappable.
pub struct Mutator<T> {
    visibility: Visibility,
    param_count: usize,
    param: TypeTag,
    write: fn(&mut T, FieldValue),
}

/// Descriptor for one mapped field
pub struct FieldDescriptor<T> {
    name: &'static str,
    role: FieldRole,
    type_tag: TypeTag,
    auto_generated: bool,
    getter: Option<Accessor<T>>,
    setter: Option<Mutator<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Descriptor for a field with the given role and declared type
    pub fn new(name: &'static str, role: FieldRole, type_tag: TypeTag) -> Self {
        Self {
            name,
            role,
            type_tag,
            auto_generated: false,
            getter: None,
            setter: None,
        }
    }

    /// Hash key field
    pub fn hash_key(name: &'static str, type_tag: TypeTag) -> Self {
        Self::new(name, FieldRole::HashKey, type_tag)
    }

    /// Range key field
    pub fn range_key(name: &'static str, type_tag: TypeTag) -> Self {
        Self::new(name, FieldRole::RangeKey, type_tag)
    }

    /// Version attribute field
    pub fn version(name: &'static str, type_tag: TypeTag) -> Self {
        Self::new(name, FieldRole::Version, type_tag)
    }

    /// Ordinary attribute field
    pub fn attribute(name: &'static str, type_tag: TypeTag) -> Self {
        Self::new(name, FieldRole::Attribute, type_tag)
    }

    /// Declare a public getter
    pub fn getter(mut self, read: fn(&T) -> FieldValue) -> Self {
        self.getter = Some(Accessor {
            visibility: Visibility::Public,
            read,
        });
        self
    }

    /// Declare a private getter
    pub fn private_getter(mut self, read: fn(&T) -> FieldValue) -> Self {
        self.getter = Some(Accessor {
            visibility: Visibility::Private,
            read,
        });
        self
    }

    /// Declare a public single-parameter setter whose parameter type
    /// matches the getter's return type
    pub fn setter(mut self, write: fn(&mut T, FieldValue)) -> Self {
        self.setter = Some(Mutator {
            visibility: Visibility::Public,
            param_count: 1,
            param: self.type_tag,
            write,
        });
        self
    }

    /// Declare a private setter
    pub fn private_setter(mut self, write: fn(&mut T, FieldValue)) -> Self {
        self.setter = Some(Mutator {
            visibility: Visibility::Private,
            param_count: 1,
            param: self.type_tag,
            write,
        });
        self
    }

    /// Override the declared parameter type of the setter
    ///
    /// Call after [`setter`](Self::setter); used to register a setter whose
    /// parameter type disagrees with the getter's return type.
    pub fn setter_param(mut self, param: TypeTag) -> Self {
        if let Some(mutator) = self.setter.as_mut() {
            mutator.param = param;
        }
        self
    }

    /// Override the declared parameter count of the setter
    ///
    /// Call after [`setter`](Self::setter); used to register an overloaded
    /// setter shape.
    pub fn setter_param_count(mut self, count: usize) -> Self {
        if let Some(mutator) = self.setter.as_mut() {
            mutator.param_count = count;
        }
        self
    }

    /// Mark the key value as assigned by the mapper at save time
    pub fn auto_generated(mut self) -> Self {
        self.auto_generated = true;
        self
    }

    /// Field name, which is also the stored attribute name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Role this field plays
    pub fn role(&self) -> FieldRole {
        self.role
    }

    /// Declared type of the field (the getter's return type)
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Whether the key value is assigned by the mapper at save time
    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    /// Declared getter visibility, if a getter exists
    pub fn getter_visibility(&self) -> Option<Visibility> {
        self.getter.as_ref().map(|g| g.visibility)
    }

    /// Declared setter visibility, if a setter exists
    pub fn setter_visibility(&self) -> Option<Visibility> {
        self.setter.as_ref().map(|s| s.visibility)
    }

    /// Declared setter parameter count, if a setter exists
    pub fn setter_param_count_declared(&self) -> Option<usize> {
        self.setter.as_ref().map(|s| s.param_count)
    }

    /// Declared setter parameter type, if a setter exists
    pub fn setter_param_declared(&self) -> Option<TypeTag> {
        self.setter.as_ref().map(|s| s.param)
    }

    /// Whether the mapper can read this field
    pub fn is_readable(&self) -> bool {
        self.getter
            .as_ref()
            .map_or(false, |g| g.visibility.is_public())
    }

    /// Read the field through its getter
    ///
    /// Returns `None` when no public getter exists; such fields are
    /// invisible to the save path.
    pub(crate) fn read(&self, obj: &T) -> Option<FieldValue> {
        let getter = self.getter.as_ref()?;
        if !getter.visibility.is_public() {
            return None;
        }
        Some((getter.read)(obj))
    }

    /// Write the field through its setter, enforcing the declared shape
    ///
    /// Fails with `InaccessibleSetter` when no public setter exists, with
    /// `SetterArity` when the declared parameter count is not one, and
    /// with `SetterTypeMismatch` when the declared parameter type
    /// disagrees with the getter's return type.
    pub(crate) fn write(
        &self,
        type_name: &'static str,
        obj: &mut T,
        value: FieldValue,
    ) -> Result<()> {
        let setter = match self.setter.as_ref() {
            Some(setter) if setter.visibility.is_public() => setter,
            _ => {
                return Err(MappingError::InaccessibleSetter {
                    type_name,
                    field: self.name,
                })
            }
        };
        if setter.param_count != 1 {
            return Err(MappingError::SetterArity {
                type_name,
                field: self.name,
                declared: setter.param_count,
            });
        }
        if setter.param != self.type_tag {
            return Err(MappingError::SetterTypeMismatch {
                type_name,
                field: self.name,
                getter: self.type_tag,
                setter: setter.param,
            });
        }
        (setter.write)(obj, value);
        Ok(())
    }
}

/// Descriptor for one mapped type
pub struct TypeDescriptor<T> {
    type_name: &'static str,
    table: Option<&'static str>,
    constructor: Option<fn() -> T>,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> TypeDescriptor<T> {
    /// Descriptor with no table marker; add one with [`table`](Self::table)
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            table: None,
            constructor: None,
            fields: Vec::new(),
        }
    }

    /// Declare the table this type maps to
    pub fn table(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }

    /// Declare the no-argument constructor used for reconstruction
    pub fn constructor(mut self, constructor: fn() -> T) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Add a field descriptor
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Name of the mapped type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared table marker
    pub fn table_name(&self) -> Option<&'static str> {
        self.table
    }

    /// All declared fields
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// The hash key field, if one is declared
    pub fn hash_key(&self) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.role == FieldRole::HashKey)
    }

    /// The range key field, if one is declared
    pub fn range_key(&self) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.role == FieldRole::RangeKey)
    }

    /// The version attribute field, if one is declared
    pub fn version(&self) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.role == FieldRole::Version)
    }

    /// Key fields in hash-then-range order
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.hash_key().into_iter().chain(self.range_key())
    }

    /// Ordinary attribute fields
    pub fn attributes(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter().filter(|f| f.role == FieldRole::Attribute)
    }

    /// Look up a field by name
    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Construct a fresh instance, if a constructor is declared
    pub(crate) fn construct(&self) -> Option<T> {
        self.constructor.map(|ctor| ctor())
    }
}
