//! Remote schema field descriptors
//!
//! The remote client exposes its columns as objects that can render
//! themselves in the REST API representation. [`to_pandas_gbq`] only needs
//! that accessor, so it is captured by the [`RemoteField`] trait.
//!
//! [`to_pandas_gbq`]: super::to_pandas_gbq

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Field, MODE_NULLABLE};

/// A column descriptor owned by the remote client
pub trait RemoteField {
    /// Returns the API representation of this field
    fn to_api_repr(&self) -> Field;
}

impl RemoteField for Field {
    fn to_api_repr(&self) -> Field {
        self.clone()
    }
}

impl<T: RemoteField + ?Sized> RemoteField for &T {
    fn to_api_repr(&self) -> Field {
        (**self).to_api_repr()
    }
}

/// Remote column as the client library models it.
///
/// Type and mode are kept exactly as given; clients commonly hand out
/// lower-case names, which is why `to_pandas_gbq` normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSchemaField {
    name: String,
    field_type: String,
    mode: String,
    description: Option<String>,
    fields: Vec<RemoteSchemaField>,
}

impl RemoteSchemaField {
    /// Create a NULLABLE field
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            mode: MODE_NULLABLE.to_string(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach sub-fields (RECORD / STRUCT columns)
    pub fn with_fields(mut self, fields: Vec<RemoteSchemaField>) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[RemoteSchemaField] {
        &self.fields
    }

    /// Rebuilds a remote field from its API representation.
    ///
    /// A missing mode becomes NULLABLE. Nested `fields`, when present, must be
    /// an array of field descriptors.
    pub fn from_api_repr(field: &Field) -> SchemaResult<Self> {
        let fields = match field.extra.get("fields") {
            None | Some(Value::Null) => Vec::new(),
            Some(nested) => {
                let nested: Vec<Field> = serde_json::from_value(nested.clone()).map_err(|e| {
                    SchemaError::malformed(format!(
                        "Invalid sub-fields of '{}': {}",
                        field.name, e
                    ))
                })?;
                nested
                    .iter()
                    .map(Self::from_api_repr)
                    .collect::<SchemaResult<Vec<_>>>()?
            }
        };

        Ok(Self {
            name: field.name.clone(),
            field_type: field.field_type.clone(),
            mode: field
                .mode
                .clone()
                .unwrap_or_else(|| MODE_NULLABLE.to_string()),
            description: field.description.clone(),
            fields,
        })
    }
}

impl RemoteSchemaField {
    /// JSON object of this field, nested fields included
    fn api_repr_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(self.name.clone()));
        object.insert("type".to_string(), Value::String(self.field_type.clone()));
        object.insert("mode".to_string(), Value::String(self.mode.clone()));
        if let Some(description) = &self.description {
            object.insert("description".to_string(), Value::String(description.clone()));
        }
        if !self.fields.is_empty() {
            object.insert("fields".to_string(), self.nested_api_repr());
        }
        Value::Object(object)
    }

    fn nested_api_repr(&self) -> Value {
        Value::Array(self.fields.iter().map(Self::api_repr_value).collect())
    }
}

impl RemoteField for RemoteSchemaField {
    fn to_api_repr(&self) -> Field {
        let mut field = Field::new(&self.name, &self.field_type).with_mode(&self.mode);
        field.description = self.description.clone();

        if !self.fields.is_empty() {
            field.extra.insert("fields".to_string(), self.nested_api_repr());
        }

        field
    }
}
