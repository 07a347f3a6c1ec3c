//! Schema reconciliation
//!
//! Single-pass helpers for moving between dataframe column types, the
//! remote client's field objects and the `{"fields": [...]}` document shape.
//! None of these recurse into RECORD sub-fields, and none mutate their
//! arguments.

use crate::frame::{DTypeKind, DataFrameLike};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

use super::remote::RemoteField;
use super::types::{Field, FieldKey, Schema, DEFAULT_TYPE, MODE_NULLABLE};

/// Converts remote client fields into a schema document.
///
/// `type` and `mode` are upper-cased; order and every other key are kept.
pub fn to_pandas_gbq<I>(remote_fields: I) -> Schema
where
    I: IntoIterator,
    I::Item: RemoteField,
{
    let fields = remote_fields
        .into_iter()
        .map(|remote| {
            let mut field = remote.to_api_repr();
            field.field_type = field.field_type.to_uppercase();
            field.mode = field.mode.map(|mode| mode.to_uppercase());
            field
        })
        .collect();

    Schema::new(fields)
}

/// Projects fields to `{name, type}` and sorts them by name.
///
/// Mode and description are dropped because generated schemas never carry
/// them.
pub fn clean_schema_fields(fields: &[Field]) -> Vec<FieldKey> {
    let mut keys: Vec<FieldKey> = fields.iter().map(Field::key).collect();
    keys.sort_by(|a, b| a.name.cmp(&b.name));
    keys
}

/// Returns true if every `{name, type}` of `schema_local` is present in
/// `schema_remote`. Field order, mode and description are ignored.
pub fn schema_is_subset(schema_remote: &Schema, schema_local: &Schema) -> bool {
    let fields_remote = clean_schema_fields(&schema_remote.fields);
    let fields_local = clean_schema_fields(&schema_local.fields);
    fields_local.iter().all(|field| fields_remote.contains(field))
}

/// Canonical type for a dtype kind, if it has one
fn canonical_type(kind: DTypeKind) -> Option<&'static str> {
    match kind {
        DTypeKind::SignedInt => Some("INTEGER"),
        DTypeKind::Bool => Some("BOOLEAN"),
        DTypeKind::Float => Some("FLOAT"),
        DTypeKind::Object | DTypeKind::Bytes | DTypeKind::Unicode => Some("STRING"),
        DTypeKind::Datetime => Some("TIMESTAMP"),
        _ => None,
    }
}

/// Generates a schema from a dataframe's column dtypes, using STRING for
/// dtypes without a mapping.
pub fn generate_bq_schema<D: DataFrameLike + ?Sized>(dataframe: &D) -> Schema {
    generate_bq_schema_with_default(dataframe, DEFAULT_TYPE)
}

/// Generates a schema from a dataframe's column dtypes.
///
/// | kind | type |
/// |------|------|
/// | `i` | INTEGER |
/// | `b` | BOOLEAN |
/// | `f` | FLOAT |
/// | `O`, `S`, `U` | STRING |
/// | `M` | TIMESTAMP |
/// | anything else | `default_type` |
///
/// Fields follow column order and carry only `name` and `type`.
pub fn generate_bq_schema_with_default<D: DataFrameLike + ?Sized>(
    dataframe: &D,
    default_type: &str,
) -> Schema {
    let fields = dataframe
        .dtypes()
        .into_iter()
        .map(|(name, kind)| {
            let field_type = match canonical_type(kind) {
                Some(mapped) => mapped,
                None => {
                    if Logger::enabled(Severity::Trace) {
                        let code = kind.code().to_string();
                        Logger::trace(
                            Event::DefaultTypeApplied.as_str(),
                            &[
                                ("column", name),
                                ("kind", code.as_str()),
                                ("type", default_type),
                            ],
                        );
                    }
                    default_type
                }
            };
            Field::new(name, field_type)
        })
        .collect();

    Schema::new(fields)
}

/// Merges `schema_new` into `schema_old`.
///
/// A new field replaces the old field of the same name, in the old field's
/// position; when the old schema repeats a name, the last occurrence is the
/// one replaced. New fields whose name is not in `schema_old` are dropped, not
/// appended: the result only ever describes columns the old schema already
/// knows about. Each drop is logged as FIELDS_DROPPED.
pub fn update_schema(schema_old: &Schema, schema_new: &Schema) -> Schema {
    let mut output_fields = schema_old.fields.clone();
    let mut dropped: Vec<&str> = Vec::new();

    for field in &schema_new.fields {
        match output_fields.iter().rposition(|old| old.name == field.name) {
            Some(index) => output_fields[index] = field.clone(),
            None => dropped.push(&field.name),
        }
    }

    if !dropped.is_empty() {
        let names = dropped.join(",");
        log_event_with_fields(Event::FieldsDropped, &[("fields", names.as_str())]);
    }

    Schema::new(output_fields)
}

/// Returns a copy of `schema` where every field without a mode is NULLABLE.
///
/// Fields that already declare a mode keep it. Idempotent.
pub fn add_default_nullable_mode(schema: &Schema) -> Schema {
    let mut result = schema.clone();
    for field in &mut result.fields {
        field.mode.get_or_insert_with(|| MODE_NULLABLE.to_string());
    }
    result
}
