//! gbq-schema - schema reconciliation between dataframes and BigQuery tables
//!
//! Pure helpers over the `{"fields": [...]}` table schema document, plus a
//! thin command-line front end.

pub mod cli;
pub mod frame;
pub mod observability;
pub mod schema;
