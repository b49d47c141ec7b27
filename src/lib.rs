//! Strongly-typed, serializable data containers
//!
//! This crate provides three composable primitives for carrying dynamic
//! data with declared shapes:
//! - [`TypedCollection`]: ordered container of homogeneous elements,
//!   validated against one [`TypeDescriptor`] at every mutation
//! - [`Record`]: keyed record over a static [`Schema`] with a
//!   setter-aware bulk-assignment ("fill") protocol
//! - [`ValidatedScalar`]: single value guarded by a [`Validate`] rule
//!
//! All three convert to plain structured data ([`Value`]) and to JSON text.
//! The sanctioned seams are the [`ToStructured`], [`ToJson`] and
//! [`Access`] traits; absent slots read as `None`, never as errors, while
//! read-only containers reject every mutation deterministically.
//!
//! Everything is synchronous and single-owner: no locks, no async, no
//! shared state between instances.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod descriptor;
pub mod error;
pub mod json;
pub mod record;
pub mod scalar;
pub mod traits;
pub mod value;

// Re-export commonly used types and traits
pub use collection::TypedCollection;
pub use descriptor::{Predicate, Primitive, TypeDescriptor, TypeSpec};
pub use error::{Error, Result};
pub use json::JsonOptions;
pub use record::{FieldSpec, Record, Schema, Setter};
pub use scalar::{AlwaysValid, Validate, ValidatedScalar};
pub use traits::{Access, ToJson, ToStructured};
pub use value::Value;
