//! Schema document loading and saving
//!
//! Two document shapes are accepted on input:
//! - `{"fields": [...]}` (the table schema document)
//! - `[...]` (a bare field list, as printed by `bq show --schema`)
//!
//! Output is always the `{"fields": [...]}` shape.

use std::fs;
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Field, Schema};

/// Parses a schema from a JSON string.
///
/// # Errors
///
/// Returns `GBQ_SCHEMA_MALFORMED` if the input is not JSON, is neither an
/// object nor an array, or contains a field without `name` or `type`.
pub fn parse_schema(input: &str) -> SchemaResult<Schema> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    match value {
        serde_json::Value::Array(_) => {
            let fields: Vec<Field> = serde_json::from_value(value)?;
            Ok(Schema::new(fields))
        }
        serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(SchemaError::malformed(
            "Schema must be an object with 'fields' or an array of fields",
        )),
    }
}

/// Loads a schema file.
pub fn load_schema(path: &Path) -> SchemaResult<Schema> {
    let content = fs::read_to_string(path).map_err(|e| {
        SchemaError::io(path.display().to_string(), format!("Failed to read file: {}", e))
    })?;

    let schema = parse_schema(&content).map_err(|e| {
        SchemaError::malformed_file(path.display().to_string(), e.message().to_string())
    })?;

    let count = schema.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::SchemaLoaded,
        &[("fields", count.as_str()), ("path", path_str.as_str())],
    );

    Ok(schema)
}

/// Writes a schema file as pretty-printed JSON, replacing any existing file.
pub fn save_schema(path: &Path, schema: &Schema) -> SchemaResult<()> {
    let content = serde_json::to_string_pretty(schema).map_err(|e| {
        SchemaError::malformed_file(
            path.display().to_string(),
            format!("Failed to serialize schema: {}", e),
        )
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                SchemaError::io(
                    parent.display().to_string(),
                    format!("Failed to create directory: {}", e),
                )
            })?;
        }
    }

    fs::write(path, content).map_err(|e| {
        SchemaError::io(path.display().to_string(), format!("Failed to write file: {}", e))
    })?;

    let path_str = path.display().to_string();
    log_event_with_fields(Event::SchemaSaved, &[("path", path_str.as_str())]);

    Ok(())
}
