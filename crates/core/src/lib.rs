//! Core types for TableDB
//!
//! This crate holds the attribute value model shared by the item store and
//! the object mapper. It has no storage or mapping logic of its own.
//!
//! - [`AttrValue`]: the store's native attribute representation
//! - [`Item`]: a named collection of attributes, the unit the store persists

pub mod attribute;

pub use attribute::{AttrValue, Item};
