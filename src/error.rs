//! Error types for the container primitives
//!
//! This module defines all error types used throughout the crate.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the container primitives
#[derive(Debug, Error)]
pub enum Error {
    /// Type specification matched none of the resolvable variants
    #[error("unknown type spec: {0:?}")]
    InvalidTypeSpec(String),

    /// An element failed validation against the bound type descriptor
    #[error("type mismatch at position {position}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Position of the offending element
        position: usize,
        /// Description of the bound descriptor
        expected: String,
        /// Type name of the rejected value
        actual: &'static str,
    },

    /// Mutation attempted on a read-only container
    #[error("{0} is read only")]
    ReadOnly(String),

    /// Scalar value rejected by its validator
    #[error("invalid value for {0}")]
    InvalidValue(String),

    /// A field setter rejected or failed to transform its input
    #[error("invalid field {field}: {message}")]
    InvalidField {
        /// Name of the field whose setter failed
        field: &'static str,
        /// Setter-provided description of the failure
        message: String,
    },

    /// JSON encoding could not represent the structured data
    #[error("serialization error: {0}")]
    Serialization(String),
}
