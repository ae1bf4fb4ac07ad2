//! In-memory item store for TableDB
//!
//! This crate implements the storage backend the mapper talks to:
//! - ItemStore: thread-safe table registry with put/get/delete item
//! - KeySchema / KeyValue: table key declarations and scalar key projection
//! - Expectation: per-attribute guards for conditional writes
//!
//! # Thread Safety
//!
//! ItemStore is `Send + Sync` and cheap to clone; all state lives behind a
//! single `parking_lot::RwLock`. Handles cloned from the same store share
//! the same tables.

pub mod error;
pub mod key;
pub mod store;

pub use error::{Result, StoreError};
pub use key::{KeySchema, KeyValue};
pub use store::{Expectation, ItemStore};
