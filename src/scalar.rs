//! Validated scalar wrapper
//!
//! A minimal wrapper enforcing a validation rule on a single value at
//! construction. The rule is a type parameter implementing [`Validate`];
//! the default, [`AlwaysValid`], accepts everything. The held value is
//! immutable for the wrapper's lifetime.

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::value::Value;

/// Validation rule for a [`ValidatedScalar`]
///
/// The default implementation accepts every value; implementors override
/// [`Validate::validate`] to constrain what their scalar may hold.
pub trait Validate {
    /// Whether `value` may be stored
    fn validate(value: &Value) -> bool {
        let _ = value;
        true
    }
}

/// The base rule: accepts everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysValid;

impl Validate for AlwaysValid {}

/// Single immutable value guaranteed to satisfy its rule
///
/// # Examples
///
/// ```
/// use dataclass::{Validate, ValidatedScalar, Value};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate(value: &Value) -> bool {
///         value.as_str().is_some_and(|s| !s.is_empty())
///     }
/// }
///
/// let name = ValidatedScalar::<NonEmpty>::new(Value::from("ada")).unwrap();
/// assert_eq!(name.value(), &Value::from("ada"));
/// assert!(ValidatedScalar::<NonEmpty>::new(Value::from("")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedScalar<V: Validate = AlwaysValid> {
    value: Value,
    _rule: PhantomData<V>,
}

impl<V: Validate> ValidatedScalar<V> {
    /// Wrap a value, running the validation rule
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when the rule rejects the value.
    pub fn new(value: Value) -> Result<Self> {
        if !V::validate(&value) {
            return Err(Error::InvalidValue(short_type_name::<V>().to_string()));
        }
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// The held value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the held value
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl<V: Validate> PartialEq for ValidatedScalar<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Last path segment of the rule's type name, for error messages
fn short_type_name<V>() -> &'static str {
    let full = std::any::type_name::<V>();
    full.rsplit("::").next().unwrap_or(full)
}
