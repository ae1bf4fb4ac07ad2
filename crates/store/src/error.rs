//! Error types for the item store
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for the item store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Operation addressed a table that was never created
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A table with this name already exists
    #[error("table already exists: {0}")]
    TableExists(String),

    /// Item lacks an attribute required by the table's key schema
    #[error("item for table '{table}' is missing key attribute '{attribute}'")]
    MissingKeyAttribute {
        /// Table whose key schema was violated
        table: String,
        /// Name of the missing key attribute
        attribute: String,
    },

    /// Key attribute is present but not a scalar the store can index
    #[error("key attribute '{attribute}' must be S, N or B, got {found}")]
    InvalidKeyAttribute {
        /// Name of the offending attribute
        attribute: String,
        /// Variant name of the supplied value
        found: &'static str,
    },

    /// A conditional write's expectation was not met
    #[error("expectation on attribute '{attribute}' was not met")]
    ConditionFailed {
        /// Attribute the failed expectation was declared on
        attribute: String,
    },
}

impl StoreError {
    /// Get the reason code for diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            StoreError::TableNotFound(_) => "table_not_found",
            StoreError::TableExists(_) => "table_exists",
            StoreError::MissingKeyAttribute { .. } => "missing_key_attribute",
            StoreError::InvalidKeyAttribute { .. } => "invalid_key_attribute",
            StoreError::ConditionFailed { .. } => "condition_failed",
        }
    }
}
