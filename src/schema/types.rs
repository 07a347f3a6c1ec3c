//! Schema type definitions
//!
//! The wire shape is the BigQuery table schema document:
//!
//! ```text
//! Schema := { "fields": [Field, ...] }
//! Field  := { "name": str, "type": str, "mode"?: str, "description"?: str, ... }
//! ```
//!
//! Keys other than name/type/mode/description are kept verbatim so that
//! nested RECORD fields or policy tags survive a round-trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mode assigned to fields that do not declare one
pub const MODE_NULLABLE: &str = "NULLABLE";
/// Field must be present
pub const MODE_REQUIRED: &str = "REQUIRED";
/// Field is an array
pub const MODE_REPEATED: &str = "REPEATED";

/// Type used by `generate_bq_schema` for dtypes with no mapping
pub const DEFAULT_TYPE: &str = "STRING";

/// Canonical (upper-case) column type names understood by the remote side
pub const CANONICAL_TYPES: &[&str] = &[
    "STRING",
    "BYTES",
    "INTEGER",
    "INT64",
    "FLOAT",
    "FLOAT64",
    "NUMERIC",
    "BIGNUMERIC",
    "BOOLEAN",
    "BOOL",
    "TIMESTAMP",
    "DATE",
    "TIME",
    "DATETIME",
    "GEOGRAPHY",
    "RECORD",
    "STRUCT",
    "JSON",
];

/// Returns true if `type_name` is one of [`CANONICAL_TYPES`] (case-sensitive).
pub fn is_canonical_type(type_name: &str) -> bool {
    CANONICAL_TYPES.contains(&type_name)
}

/// Descriptor for one column of a table schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name, unique within a schema (case-sensitive)
    pub name: String,
    /// Column type name
    #[serde(rename = "type")]
    pub field_type: String,
    /// NULLABLE, REQUIRED or REPEATED
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Optional column description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Every other key of the descriptor, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Field {
    /// Create a field with only a name and a type
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            mode: None,
            description: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an arbitrary extra key
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The `{name, type}` projection used for comparisons
    pub fn key(&self) -> FieldKey {
        FieldKey {
            name: self.name.clone(),
            field_type: self.field_type.clone(),
        }
    }
}

/// Name and type of a field, with mode and description stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldKey {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A table schema: an ordered list of field descriptors.
///
/// Order matters when the schema is sent to the remote system, not when two
/// schemas are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from a list of fields
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for Schema {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}
