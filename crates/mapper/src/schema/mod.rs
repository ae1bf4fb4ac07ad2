//! Schema descriptors for mapped types
//!
//! - [`TypeDescriptor`] / [`FieldDescriptor`]: registration-time schema,
//!   built once per type
//! - [`Mappable`]: the trait tying a type to its descriptor
//! - [`FieldValue`] / [`TypeTag`]: values and types at the accessor boundary
//! - validation of descriptor shape before any store call

pub mod descriptor;
pub mod field_value;
pub(crate) mod validate;

pub use descriptor::{Accessor, FieldDescriptor, Mappable, Mutator, TypeDescriptor};
pub use field_value::{FieldRole, FieldValue, TypeTag, Visibility};
