//! Object mapper for TableDB
//!
//! Maps plain Rust types onto the item store through registration-time
//! schema descriptors: each mapped type declares a table, a hash key,
//! optional range key and version attributes, and per-field accessors
//! (see [`schema`]). The mapper validates the descriptor before any store
//! call and converts field values to and from the store's attribute
//! representation under an explicit [`ConversionSchema`].
//!
//! All violations surface synchronously as [`MappingError`], one variant
//! per violation category.

pub mod config;
pub mod error;
pub mod mapper;
pub mod schema;

mod convert;

pub use config::{ConversionSchema, MapperConfig};
pub use error::{MappingError, Result};
pub use mapper::Mapper;
pub use schema::{
    FieldDescriptor, FieldRole, FieldValue, Mappable, TypeDescriptor, TypeTag, Visibility,
};
