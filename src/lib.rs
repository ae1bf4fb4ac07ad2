//! TableDB - Embedded item store with a typed object mapper
//!
//! TableDB stores items (named collections of attributes) in in-memory
//! tables and maps plain Rust types onto them through registration-time
//! schema descriptors.
//!
//! # Quick Start
//!
//! ```
//! use once_cell::sync::Lazy;
//! use tabledb::schema::{FieldDescriptor, FieldValue, Mappable, TypeDescriptor, TypeTag};
//! use tabledb::{ItemStore, KeySchema, Mapper};
//!
//! #[derive(Default)]
//! struct User {
//!     id: Option<String>,
//!     name: Option<String>,
//! }
//!
//! impl Mappable for User {
//!     fn descriptor() -> &'static TypeDescriptor<Self> {
//!         static DESC: Lazy<TypeDescriptor<User>> = Lazy::new(|| {
//!             TypeDescriptor::new("User")
//!                 .table("users")
//!                 .constructor(User::default)
//!                 .field(
//!                     FieldDescriptor::hash_key("id", TypeTag::Str)
//!                         .getter(|u: &User| FieldValue::from_option(u.id.clone()))
//!                         .setter(|u: &mut User, v| u.id = v.into_string()),
//!                 )
//!                 .field(
//!                     FieldDescriptor::attribute("name", TypeTag::Str)
//!                         .getter(|u: &User| FieldValue::from_option(u.name.clone()))
//!                         .setter(|u: &mut User, v| u.name = v.into_string()),
//!                 )
//!         });
//!         &DESC
//!     }
//! }
//!
//! let store = ItemStore::new();
//! store.create_table("users", KeySchema::hash("id")).unwrap();
//! let mapper = Mapper::new(store);
//!
//! let mut user = User {
//!     id: Some("u1".into()),
//!     name: Some("Alice".into()),
//! };
//! mapper.save(&mut user).unwrap();
//!
//! let found: User = mapper.load("u1").unwrap().unwrap();
//! assert_eq!(found.name.as_deref(), Some("Alice"));
//! ```
//!
//! # Architecture
//!
//! - `tabledb-core`: the attribute value model ([`AttrValue`], [`Item`])
//! - `tabledb-store`: the in-memory item store ([`ItemStore`])
//! - `tabledb-mapper`: descriptors, validation, conversion and the
//!   [`Mapper`] facade
//!
//! Every mapping violation is reported synchronously as a
//! [`MappingError`]; store-level failures pass through transparently.

pub use tabledb_core::{AttrValue, Item};
pub use tabledb_mapper::{
    schema, ConversionSchema, Mapper, MapperConfig, MappingError, Result,
};
pub use tabledb_store::{Expectation, ItemStore, KeySchema, StoreError};
