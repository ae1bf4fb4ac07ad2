//! Mapper Integration Tests
//!
//! Organized by dimension:
//! - exceptions: one fixture per invalid type shape or bad stored datum,
//!   asserting the precise mapping error each must trigger
//! - lifecycle: positive save/load/delete coverage, versioning, and
//!   conversion-schema behavior

#[path = "../common/mod.rs"]
mod common;

mod exceptions;
