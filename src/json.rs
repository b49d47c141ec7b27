//! JSON encoding options and the shared encode path
//!
//! This module defines:
//! - JsonOptions: bit-set controlling output formatting
//! - encode: the single path from structured data to JSON text
//!
//! Every container's `to_json` funnels through [`encode`]; the options bits
//! are passed through verbatim, unknown bits are ignored.

use std::ops::{BitOr, BitOrAssign};

use crate::error::{Error, Result};
use crate::value::Value;

/// Formatting options for JSON output
///
/// A `Copy` bit-set; combine flags with `|`. The empty set produces
/// compact output.
///
/// # Examples
///
/// ```
/// use dataclass::JsonOptions;
///
/// let options = JsonOptions::PRETTY;
/// assert!(options.contains(JsonOptions::PRETTY));
/// assert!(!JsonOptions::NONE.contains(JsonOptions::PRETTY));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions(u32);

impl JsonOptions {
    /// Compact output, no flags set
    pub const NONE: JsonOptions = JsonOptions(0);

    /// Pretty-print with indentation
    pub const PRETTY: JsonOptions = JsonOptions(1);

    /// Construct from raw bits; unknown bits are carried but ignored
    pub fn from_bits(bits: u32) -> Self {
        JsonOptions(bits)
    }

    /// The raw bits
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether all flags in `other` are set
    pub fn contains(self, other: JsonOptions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for JsonOptions {
    type Output = JsonOptions;

    fn bitor(self, rhs: JsonOptions) -> JsonOptions {
        JsonOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for JsonOptions {
    fn bitor_assign(&mut self, rhs: JsonOptions) {
        self.0 |= rhs.0;
    }
}

/// Encode a value as JSON text
///
/// Nested containers serialize as their structured form. Fails before
/// writing any output if the data cannot be represented.
///
/// # Errors
///
/// Returns [`Error::Serialization`] for non-finite floats anywhere in the
/// data, or when the underlying encoder fails.
pub fn encode(value: &Value, options: JsonOptions) -> Result<String> {
    check_encodable(value)?;

    let text = if options.contains(JsonOptions::PRETTY) {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    text.map_err(|e| Error::Serialization(e.to_string()))
}

/// JSON has no representation for NaN or infinities; reject them up front
/// so a failed encode never emits partial output.
fn check_encodable(value: &Value) -> Result<()> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(Error::Serialization(format!(
            "non-finite float {f} cannot be encoded"
        ))),
        Value::Array(items) => items.iter().try_for_each(check_encodable),
        Value::Object(fields) => fields.values().try_for_each(check_encodable),
        Value::Collection(collection) => collection
            .iter()
            .try_for_each(|(_, item)| check_encodable(item)),
        Value::Record(record) => record
            .iter()
            .try_for_each(|(_, field)| check_encodable(field)),
        _ => Ok(()),
    }
}
