//! Capability traits
//!
//! This module defines the seams external code is allowed to depend on:
//! - ToStructured: convert to recursively-plain data
//! - ToJson: convert to JSON text
//! - Access: indexed/keyed access (has/get/set/unset)
//!
//! Both container types implement all three; `ToJson` is blanket-implemented
//! over `ToStructured` so the JSON path is always encode-of-structured.

use crate::error::Result;
use crate::json::{self, JsonOptions};
use crate::value::Value;

/// Conversion to recursively-plain structured data
///
/// The output must contain no `Collection` or `Record` variants at any
/// depth; nested containers are materialized into plain arrays and objects.
/// This is the only contract downstream consumers (templating, HTTP
/// responses, persistence layers) rely on.
pub trait ToStructured {
    /// Produce the plain structured form of this value
    fn to_structured(&self) -> Value;
}

/// Conversion to JSON text
pub trait ToJson: ToStructured {
    /// Serialize the structured form to JSON text
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] when the structured data
    /// cannot be represented as JSON (non-finite floats, encoder failures).
    fn to_json(&self, options: JsonOptions) -> Result<String> {
        json::encode(&self.to_structured(), options)
    }
}

impl<T: ToStructured> ToJson for T {}

/// Indexed or keyed access over a container
///
/// Implemented by `TypedCollection` for `usize` positions and by `Record`
/// for `&str` field names. This is the sole sanctioned access path; there
/// is deliberately no way to reach container slots around it.
pub trait Access<K> {
    /// Whether an element occupies the slot
    fn has(&self, key: K) -> bool;

    /// Element at the slot; `None` is the absent sentinel, never an error
    fn get(&self, key: K) -> Option<&Value>;

    /// Write through the container's validated mutation path
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] on read-only containers; other
    /// failures are container-specific.
    fn set(&mut self, key: K, value: Value) -> Result<()>;

    /// Clear the slot
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] on read-only containers.
    fn unset(&mut self, key: K) -> Result<()>;
}
