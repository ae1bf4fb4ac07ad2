//! Shape validation for type descriptors
//!
//! Deterministically classifies a descriptor as mappable or not before any
//! store call is attempted. Save and load enforce different subsets:
//!
//! - Save checks everything it will touch: table marker, key accessors,
//!   setter shapes, version type, attribute support under the active
//!   conversion schema.
//! - Load checks only what must hold before the fetch (table marker, hash
//!   key, key getter visibility); constructor and setter problems surface
//!   during reconstruction, once stored data exists.

use crate::config::ConversionSchema;
use crate::error::{MappingError, Result};
use crate::schema::{FieldDescriptor, TypeDescriptor, TypeTag, Visibility};

/// Validate a descriptor for the save path
pub(crate) fn check_save<T>(desc: &TypeDescriptor<T>, schema: ConversionSchema) -> Result<()> {
    check_structure(desc)?;

    for field in desc.key_fields() {
        check_key_field(desc, field)?;
    }

    if let Some(version) = desc.version() {
        if !version.type_tag().is_integral() {
            return Err(MappingError::FractionalVersion {
                type_name: desc.type_name(),
                field: version.name(),
                tag: version.type_tag(),
            });
        }
        // Save reads the current version and writes the increment back.
        check_readable(desc, version)?;
        check_writable(desc, version)?;
    }

    for field in desc.fields() {
        check_setter_shape(desc, field)?;
    }

    for field in desc.attributes() {
        if let Some(tag) = unsupported_under(field.type_tag(), schema) {
            return Err(MappingError::UnsupportedAttributeType {
                field: field.name(),
                tag,
                schema,
            });
        }
    }

    Ok(())
}

/// Validate a descriptor for the load path
pub(crate) fn check_load<T>(desc: &TypeDescriptor<T>) -> Result<()> {
    check_structure(desc)?;
    for field in desc.key_fields() {
        check_readable(desc, field)?;
    }
    Ok(())
}

fn check_structure<T>(desc: &TypeDescriptor<T>) -> Result<()> {
    if desc.table_name().is_none() {
        return Err(MappingError::MissingTable {
            type_name: desc.type_name(),
        });
    }
    match desc.hash_key() {
        Some(field) if field.getter_visibility().is_some() => Ok(()),
        _ => Err(MappingError::MissingHashKey {
            type_name: desc.type_name(),
        }),
    }
}

fn check_key_field<T>(desc: &TypeDescriptor<T>, field: &FieldDescriptor<T>) -> Result<()> {
    check_readable(desc, field)?;
    // Bool is scalar in the value model but the store cannot index it.
    if !matches!(
        field.type_tag(),
        TypeTag::Str | TypeTag::Int | TypeTag::Float | TypeTag::Bytes
    ) {
        return Err(MappingError::UnsupportedKeyType {
            type_name: desc.type_name(),
            field: field.name(),
            tag: field.type_tag(),
        });
    }
    // Keys must be writable: the mapper assigns generated and reloaded
    // key values through the setter.
    check_writable(desc, field)
}

fn check_readable<T>(desc: &TypeDescriptor<T>, field: &FieldDescriptor<T>) -> Result<()> {
    match field.getter_visibility() {
        Some(Visibility::Public) => Ok(()),
        _ => Err(MappingError::InaccessibleGetter {
            type_name: desc.type_name(),
            field: field.name(),
        }),
    }
}

fn check_writable<T>(desc: &TypeDescriptor<T>, field: &FieldDescriptor<T>) -> Result<()> {
    match field.setter_visibility() {
        Some(Visibility::Public) => Ok(()),
        _ => Err(MappingError::InaccessibleSetter {
            type_name: desc.type_name(),
            field: field.name(),
        }),
    }
}

fn check_setter_shape<T>(desc: &TypeDescriptor<T>, field: &FieldDescriptor<T>) -> Result<()> {
    if let Some(declared) = field.setter_param_count_declared() {
        if declared != 1 {
            return Err(MappingError::SetterArity {
                type_name: desc.type_name(),
                field: field.name(),
                declared,
            });
        }
    }
    if let Some(param) = field.setter_param_declared() {
        if param != field.type_tag() {
            return Err(MappingError::SetterTypeMismatch {
                type_name: desc.type_name(),
                field: field.name(),
                getter: field.type_tag(),
                setter: param,
            });
        }
    }
    Ok(())
}

fn unsupported_under(tag: TypeTag, schema: ConversionSchema) -> Option<TypeTag> {
    match (schema, tag) {
        (ConversionSchema::Scalar, TypeTag::List | TypeTag::Document) => Some(tag),
        _ => None,
    }
}
