//! Error types for the object mapper
//!
//! The mapper reports every violation through [`MappingError`], one variant
//! per violation category, so callers can branch on cause. Store-level
//! failures pass through transparently.
//!
//! All errors are raised synchronously at the point of detection; a failed
//! save or load writes nothing and returns no partial result.

use thiserror::Error;

use crate::config::ConversionSchema;
use crate::schema::TypeTag;
use tabledb_store::StoreError;

/// Result type alias for mapper operations
pub type Result<T> = std::result::Result<T, MappingError>;

/// Error types for the object mapper
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// The type's descriptor declares no table marker
    #[error("type {type_name} declares no table")]
    MissingTable {
        /// Mapped type
        type_name: &'static str,
    },

    /// The type's descriptor declares no readable hash key field
    #[error("type {type_name} declares no readable hash key")]
    MissingHashKey {
        /// Mapped type
        type_name: &'static str,
    },

    /// A getter the operation needs is absent or not public
    #[error("getter for {type_name}.{field} is not accessible")]
    InaccessibleGetter {
        /// Mapped type
        type_name: &'static str,
        /// Field whose getter is unusable
        field: &'static str,
    },

    /// A setter the operation needs is absent or not public
    #[error("setter for {type_name}.{field} is not accessible")]
    InaccessibleSetter {
        /// Mapped type
        type_name: &'static str,
        /// Field whose setter is unusable
        field: &'static str,
    },

    /// A setter declares a parameter count other than one
    #[error("setter for {type_name}.{field} must take exactly one parameter, declares {declared}")]
    SetterArity {
        /// Mapped type
        type_name: &'static str,
        /// Field with the ambiguous setter
        field: &'static str,
        /// Declared parameter count
        declared: usize,
    },

    /// A setter's parameter type differs from the getter's return type
    #[error(
        "setter for {type_name}.{field} takes {setter} but the getter returns {getter}"
    )]
    SetterTypeMismatch {
        /// Mapped type
        type_name: &'static str,
        /// Field with mismatched accessors
        field: &'static str,
        /// Getter's declared tag
        getter: TypeTag,
        /// Setter's declared parameter tag
        setter: TypeTag,
    },

    /// Reconstruction needs a no-argument constructor the type lacks
    #[error("type {type_name} declares no no-argument constructor")]
    NoDefaultConstructor {
        /// Mapped type
        type_name: &'static str,
    },

    /// A version attribute is declared with a non-integral type
    #[error("version attribute {type_name}.{field} must be integral, declared {tag}")]
    FractionalVersion {
        /// Mapped type
        type_name: &'static str,
        /// Version field
        field: &'static str,
        /// Declared tag
        tag: TypeTag,
    },

    /// A key field is declared with a type the store cannot index
    #[error("key {type_name}.{field} has unsupported type {tag}")]
    UnsupportedKeyType {
        /// Mapped type
        type_name: &'static str,
        /// Key field
        field: &'static str,
        /// Declared tag
        tag: TypeTag,
    },

    /// An attribute's declared type is not supported by the active
    /// conversion schema
    #[error("attribute {field} of type {tag} is not supported by the {schema} conversion schema")]
    UnsupportedAttributeType {
        /// Offending field
        field: &'static str,
        /// Declared tag
        tag: TypeTag,
        /// Active conversion schema
        schema: ConversionSchema,
    },

    /// An auto-generated key was left unset and its type cannot be generated
    #[error("cannot generate a value for key {type_name}.{field} of type {tag}")]
    KeyGeneration {
        /// Mapped type
        type_name: &'static str,
        /// Auto-generated key field
        field: &'static str,
        /// Declared tag
        tag: TypeTag,
    },

    /// A key value the operation needs was absent
    #[error("key {type_name}.{field} has no value")]
    MissingKeyValue {
        /// Mapped type
        type_name: &'static str,
        /// Key field
        field: &'static str,
    },

    /// A stored attribute (or supplied key) is incompatible with the
    /// field's declared type
    #[error("attribute '{field}' expects {expected}, found {found}")]
    AttributeTypeMismatch {
        /// Field being converted
        field: String,
        /// Declared tag
        expected: TypeTag,
        /// Description of the incompatible value
        found: String,
    },

    /// An optimistic version guard failed on save
    #[error("stale version for {type_name}.{field}")]
    VersionConflict {
        /// Mapped type
        type_name: &'static str,
        /// Version field
        field: &'static str,
    },

    /// Store-level failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MappingError {
    /// Get the reason code for diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            MappingError::MissingTable { .. } => "missing_table",
            MappingError::MissingHashKey { .. } => "missing_hash_key",
            MappingError::InaccessibleGetter { .. } => "inaccessible_getter",
            MappingError::InaccessibleSetter { .. } => "inaccessible_setter",
            MappingError::SetterArity { .. } => "setter_arity",
            MappingError::SetterTypeMismatch { .. } => "setter_type_mismatch",
            MappingError::NoDefaultConstructor { .. } => "no_default_constructor",
            MappingError::FractionalVersion { .. } => "fractional_version",
            MappingError::UnsupportedKeyType { .. } => "unsupported_key_type",
            MappingError::UnsupportedAttributeType { .. } => "unsupported_attribute_type",
            MappingError::KeyGeneration { .. } => "key_generation",
            MappingError::MissingKeyValue { .. } => "missing_key_value",
            MappingError::AttributeTypeMismatch { .. } => "attribute_type_mismatch",
            MappingError::VersionConflict { .. } => "version_conflict",
            MappingError::Store(_) => "store",
        }
    }
}
