//! Schema reconciliation for BigQuery-style table schemas
//!
//! A schema is an ordered list of field descriptors. This module translates
//! between that document, the remote client's field objects and a
//! dataframe's column dtypes, and compares or merges two schemas.
//!
//! # Properties
//!
//! - Every operation is a pure function of its arguments
//! - Inputs are never mutated; changes are made on an explicit clone
//! - Comparison looks only at name and type, never at order
//! - No recursion into RECORD sub-fields

mod errors;
mod loader;
mod reconcile;
mod remote;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use loader::{load_schema, parse_schema, save_schema};
pub use reconcile::{
    add_default_nullable_mode, clean_schema_fields, generate_bq_schema,
    generate_bq_schema_with_default, schema_is_subset, to_pandas_gbq, update_schema,
};
pub use remote::{RemoteField, RemoteSchemaField};
pub use types::{
    is_canonical_type, Field, FieldKey, Schema, CANONICAL_TYPES, DEFAULT_TYPE, MODE_NULLABLE,
    MODE_REPEATED, MODE_REQUIRED,
};
