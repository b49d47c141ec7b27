//! Keyed records with a static field schema
//!
//! This module defines:
//! - FieldSpec: one declared field (name + optional setter)
//! - Schema: the per-subtype field table, declared as a `static`
//! - Record: an instance holding one value per declared field
//!
//! A concrete record "subtype" is a `static Schema`; the field set is fixed
//! at compile time, so every instance of a schema observes the identical
//! set. Writes go through the fill protocol: unknown keys are skipped
//! silently, declared setters take precedence over direct assignment, and
//! clearing a field assigns null through the same path rather than removing
//! the field.
//!
//! # Examples
//!
//! ```
//! use dataclass::{Access, FieldSpec, Record, Schema, Value};
//!
//! static USER: Schema = Schema {
//!     name: "User",
//!     read_only: false,
//!     fields: &[
//!         FieldSpec { name: "name", setter: None },
//!         FieldSpec { name: "age", setter: None },
//!     ],
//! };
//!
//! let mut user = Record::new(&USER, [("name", Value::from("ada"))]).unwrap();
//! assert_eq!(user.keys(), vec!["name", "age"]);
//! assert_eq!(user.get("name"), Some(&Value::from("ada")));
//! assert!(!user.has("age"));
//! user.set("age", Value::Int(36)).unwrap();
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::{Access, ToStructured};
use crate::value::Value;

/// Field setter invoked by the fill protocol
///
/// Setters own all validation and transformation for their field and store
/// the outcome through [`Record::write`]. Errors abort the remaining fill.
pub type Setter = fn(&mut Record, Value) -> Result<()>;

/// One declared field of a schema
#[derive(Debug)]
pub struct FieldSpec {
    /// Field name, unique within the schema
    pub name: &'static str,
    /// Setter taking precedence over direct assignment, if any
    pub setter: Option<Setter>,
}

/// Field table for a concrete record subtype
///
/// Declared once as a `static` per subtype; internal members simply are not
/// listed, which keeps them outside the externally addressable set.
#[derive(Debug)]
pub struct Schema {
    /// Subtype name, used in error messages
    pub name: &'static str,
    /// Whether every instance of this schema rejects mutation after
    /// construction
    pub read_only: bool,
    /// Declared fields, in declaration order
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Position of a field in the declaration order, `None` if undeclared
    pub fn field_index(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == key)
    }
}

/// Keyed record instance over a static [`Schema`]
///
/// Holds exactly one value per declared field, null until assigned.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<Value>,
}

impl PartialEq for Record {
    /// Same schema (by identity) and equal field values
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl Record {
    /// Create a record with every field null
    pub fn empty(schema: &'static Schema) -> Self {
        Record {
            schema,
            values: vec![Value::Null; schema.fields.len()],
        }
    }

    /// Create a record and apply the fill protocol to `initial`
    ///
    /// Unknown keys are dropped silently; declared setters run for their
    /// fields. Initial data is applied even for read-only schemas - the
    /// read-only flag guards mutation after construction, not construction
    /// itself.
    ///
    /// # Errors
    ///
    /// Propagates the first setter error; no instance is produced then.
    pub fn new<K, I>(schema: &'static Schema, initial: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut record = Self::empty(schema);
        record.fill_inner(initial)?;
        Ok(record)
    }

    /// The schema this record was created from
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Declared field names, declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        self.schema.fields.iter().map(|field| field.name).collect()
    }

    /// Iterate `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.schema
            .fields
            .iter()
            .map(|field| field.name)
            .zip(self.values.iter())
    }

    /// Bulk-assign fields through the fill protocol
    ///
    /// For each entry: undeclared keys are skipped silently; a declared
    /// setter is invoked with the value, otherwise the value is assigned
    /// directly. Fill is not transactional - a setter error aborts the
    /// remaining entries and fields processed before it stay mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::ReadOnly`] when the schema is read-only
    /// - The first setter error, verbatim
    pub fn fill<K, I>(&mut self, params: I) -> Result<&mut Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        if self.schema.read_only {
            debug!(
                target: "dataclass::record",
                schema = self.schema.name,
                "fill rejected, schema is read only"
            );
            return Err(Error::ReadOnly(self.schema.name.to_string()));
        }
        self.fill_inner(params)?;
        Ok(self)
    }

    fn fill_inner<K, I>(&mut self, params: I) -> Result<()>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        for (key, value) in params {
            let key = key.as_ref();
            let Some(index) = self.schema.field_index(key) else {
                trace!(
                    target: "dataclass::record",
                    schema = self.schema.name,
                    key,
                    "skipping unknown field"
                );
                continue;
            };

            match self.schema.fields[index].setter {
                Some(setter) => setter(self, value)?,
                None => self.values[index] = value,
            }
        }
        Ok(())
    }

    /// Direct assignment, bypassing the setter table
    ///
    /// This is the storage path setters use for their own field. Undeclared
    /// keys are ignored.
    pub fn write(&mut self, key: &str, value: Value) {
        if let Some(index) = self.schema.field_index(key) {
            self.values[index] = value;
        }
    }
}

impl Access<&str> for Record {
    /// Declared AND currently non-null
    ///
    /// A declared field holding null does not "exist" in the access sense;
    /// existence is existence-with-a-value.
    fn has(&self, key: &str) -> bool {
        self.schema
            .field_index(key)
            .is_some_and(|index| !self.values[index].is_null())
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.schema.field_index(key).map(|index| &self.values[index])
    }

    /// Single-entry fill
    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.fill([(key, value)]).map(|_| ())
    }

    /// Clear through the fill protocol
    ///
    /// Assigns null via the field's setter-or-direct path; the field stays
    /// declared.
    fn unset(&mut self, key: &str) -> Result<()> {
        self.fill([(key, Value::Null)]).map(|_| ())
    }
}

impl ToStructured for Record {
    /// Ordered mapping of declared fields, nested containers materialized
    fn to_structured(&self) -> Value {
        let fields: IndexMap<String, Value> = self
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_structured()))
            .collect();
        Value::Object(fields)
    }
}
