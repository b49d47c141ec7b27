//! Homogeneous typed collection
//!
//! An ordered, position-based container of elements that all satisfy one
//! [`TypeDescriptor`], resolved once at construction. Positions behave like
//! sparse slots: `unset` leaves a hole, and a `set` against an occupied slot
//! appends at the next free position instead of overwriting (see
//! [`Access::set`] on this type).

use std::collections::BTreeMap;

use tracing::debug;

use crate::descriptor::{TypeDescriptor, TypeSpec};
use crate::error::{Error, Result};
use crate::traits::{Access, ToStructured};
use crate::value::Value;

/// Ordered container of homogeneous, validated elements
///
/// Every stored element satisfies the descriptor bound at construction.
///
/// # Examples
///
/// ```
/// use dataclass::{Access, TypeSpec, TypedCollection, Value};
///
/// let mut numbers =
///     TypedCollection::new([Value::Int(1), Value::Int(2)], TypeSpec::name("int")).unwrap();
/// assert_eq!(numbers.len(), 2);
/// assert_eq!(numbers.get(0), Some(&Value::Int(1)));
/// assert!(numbers.set(5, Value::Int(9)).is_ok());
/// assert!(numbers.set(0, Value::from("nope")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TypedCollection {
    items: BTreeMap<usize, Value>,
    descriptor: TypeDescriptor,
    read_only: bool,
}

impl PartialEq for TypedCollection {
    /// Content equality; the bound descriptor does not participate
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl TypedCollection {
    /// Create a collection, validating every initial element
    ///
    /// Elements are stored in iteration order, renumbered from 0. Validation
    /// is all-or-nothing: on failure no instance is produced.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTypeSpec`] when the spec does not resolve
    /// - [`Error::TypeMismatch`] naming the position of the first element
    ///   failing the resolved descriptor
    pub fn new(items: impl IntoIterator<Item = Value>, spec: TypeSpec) -> Result<Self> {
        Self::build(items, spec, false)
    }

    /// Create a permanently read-only collection
    ///
    /// Identical to [`TypedCollection::new`], but every later `set`/`unset`
    /// fails with [`Error::ReadOnly`]. The flag is fixed at construction.
    ///
    /// # Errors
    ///
    /// As for [`TypedCollection::new`].
    pub fn new_read_only(items: impl IntoIterator<Item = Value>, spec: TypeSpec) -> Result<Self> {
        Self::build(items, spec, true)
    }

    fn build(
        items: impl IntoIterator<Item = Value>,
        spec: TypeSpec,
        read_only: bool,
    ) -> Result<Self> {
        let descriptor = TypeDescriptor::resolve(spec)?;

        let mut stored = BTreeMap::new();
        for (position, item) in items.into_iter().enumerate() {
            if !descriptor.check(&item) {
                return Err(Error::TypeMismatch {
                    position,
                    expected: descriptor.expected(),
                    actual: item.type_name(),
                });
            }
            stored.insert(position, item);
        }

        Ok(Self {
            items: stored,
            descriptor,
            read_only,
        })
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether mutation is permanently disabled
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The descriptor bound at construction
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Iterate `(position, element)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.items.iter().map(|(position, item)| (*position, item))
    }

    /// Next free position: one past the highest occupied slot
    fn next_position(&self) -> usize {
        self.items.keys().next_back().map_or(0, |last| last + 1)
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            debug!(target: "dataclass::collection", "mutation rejected, collection is read only");
            return Err(Error::ReadOnly("TypedCollection".to_string()));
        }
        Ok(())
    }
}

impl Access<usize> for TypedCollection {
    fn has(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(&index)
    }

    /// Validated write with append-on-existing semantics
    ///
    /// The value must satisfy the bound descriptor; failures are rejected
    /// with [`Error::TypeMismatch`] rather than silently dropped. If `index`
    /// already denotes an occupied slot the value is appended at the next
    /// free position and slot `index` is left untouched; an unoccupied
    /// `index` is written exactly at that slot.
    fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.check_writable()?;

        if !self.descriptor.check(&value) {
            debug!(
                target: "dataclass::collection",
                index,
                actual = value.type_name(),
                "value rejected by bound descriptor"
            );
            return Err(Error::TypeMismatch {
                position: index,
                expected: self.descriptor.expected(),
                actual: value.type_name(),
            });
        }

        if self.has(index) {
            let position = self.next_position();
            self.items.insert(position, value);
        } else {
            self.items.insert(index, value);
        }
        Ok(())
    }

    fn unset(&mut self, index: usize) -> Result<()> {
        self.check_writable()?;
        self.items.remove(&index);
        Ok(())
    }
}

impl ToStructured for TypedCollection {
    /// Plain sequence of elements in position order, nested containers
    /// materialized recursively
    fn to_structured(&self) -> Value {
        Value::Array(self.items.values().map(ToStructured::to_structured).collect())
    }
}
