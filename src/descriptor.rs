//! Type specifications and resolved descriptors
//!
//! This module defines:
//! - TypeSpec: What a collection accepts, as given by the caller
//! - Primitive: The four primitive kinds addressable by name
//! - TypeDescriptor: The resolved, immutable validation rule
//!
//! A [`TypeSpec`] is resolved exactly once, at collection construction,
//! into a [`TypeDescriptor`]. The descriptor is bound for the lifetime of
//! the collection and never re-inspected; every read-through-write path
//! funnels into [`TypeDescriptor::check`].

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::record::Schema;
use crate::value::Value;

/// Validation predicate over values
///
/// `Arc` so descriptors stay cheaply cloneable and values holding nested
/// collections remain shareable across threads.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Type specification accepted by collection constructors
///
/// Three variants, tried in order during resolution:
/// - `Name`: a primitive name (`int`, `float`, `bool`, `string`); any other
///   name fails resolution with [`Error::InvalidTypeSpec`]
/// - `Predicate`: an arbitrary validation function
/// - `Instance`: accepts records of exactly the given schema
pub enum TypeSpec {
    /// Primitive kind addressed by name
    Name(String),
    /// Custom validation predicate
    Predicate(Predicate),
    /// Records of a specific schema
    Instance(&'static Schema),
}

impl TypeSpec {
    /// Spec for a primitive kind by name
    pub fn name(name: impl Into<String>) -> Self {
        TypeSpec::Name(name.into())
    }

    /// Spec from a validation predicate
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        TypeSpec::Predicate(Arc::new(f))
    }

    /// Spec accepting records of the given schema
    pub fn instance(schema: &'static Schema) -> Self {
        TypeSpec::Instance(schema)
    }
}

impl fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Name(name) => f.debug_tuple("Name").field(name).finish(),
            TypeSpec::Predicate(_) => f.write_str("Predicate(..)"),
            TypeSpec::Instance(schema) => f.debug_tuple("Instance").field(&schema.name).finish(),
        }
    }
}

/// The four primitive kinds addressable by name in a [`TypeSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `int` - 64-bit signed integers
    Int,
    /// `float` - 64-bit floats
    Float,
    /// `bool` - booleans
    Bool,
    /// `string` - UTF-8 strings
    String,
}

impl Primitive {
    /// Parse a primitive name, `None` if the name is not a primitive
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Primitive::Int),
            "float" => Some(Primitive::Float),
            "bool" => Some(Primitive::Bool),
            "string" => Some(Primitive::String),
            _ => None,
        }
    }

    /// The name this primitive resolves from
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::Bool => "bool",
            Primitive::String => "string",
        }
    }

    /// Runtime-kind check for a value
    pub fn check(self, value: &Value) -> bool {
        match self {
            Primitive::Int => value.is_int(),
            Primitive::Float => value.is_float(),
            Primitive::Bool => value.is_bool(),
            Primitive::String => value.is_string(),
        }
    }
}

/// Resolved, immutable validation rule bound to a collection
#[derive(Clone)]
pub enum TypeDescriptor {
    /// Runtime-kind check for a primitive
    Primitive(Primitive),
    /// Caller-supplied predicate
    Predicate(Predicate),
    /// Schema-identity check for nested records
    Instance(&'static Schema),
}

impl TypeDescriptor {
    /// Resolve a specification into a descriptor
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeSpec`] when a `Name` spec is not one of
    /// the four primitive names.
    pub fn resolve(spec: TypeSpec) -> Result<Self> {
        match spec {
            TypeSpec::Name(name) => Primitive::parse(&name)
                .map(TypeDescriptor::Primitive)
                .ok_or(Error::InvalidTypeSpec(name)),
            TypeSpec::Predicate(predicate) => Ok(TypeDescriptor::Predicate(predicate)),
            TypeSpec::Instance(schema) => Ok(TypeDescriptor::Instance(schema)),
        }
    }

    /// Check a value against this descriptor
    pub fn check(&self, value: &Value) -> bool {
        match self {
            TypeDescriptor::Primitive(primitive) => primitive.check(value),
            TypeDescriptor::Predicate(predicate) => predicate(value),
            TypeDescriptor::Instance(schema) => match value {
                Value::Record(record) => std::ptr::eq(record.schema(), *schema),
                _ => false,
            },
        }
    }

    /// Human-readable description of what this descriptor accepts
    ///
    /// Used for error messages.
    pub fn expected(&self) -> String {
        match self {
            TypeDescriptor::Primitive(primitive) => primitive.name().to_string(),
            TypeDescriptor::Predicate(_) => "predicate".to_string(),
            TypeDescriptor::Instance(schema) => schema.name.to_string(),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(primitive) => {
                f.debug_tuple("Primitive").field(primitive).finish()
            }
            TypeDescriptor::Predicate(_) => f.write_str("Predicate(..)"),
            TypeDescriptor::Instance(schema) => {
                f.debug_tuple("Instance").field(&schema.name).finish()
            }
        }
    }
}
