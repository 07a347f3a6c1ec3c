//! CLI module for gbq-schema
//!
//! Provides command-line access to each reconcile operation:
//! - normalize: remote field representations to a schema document
//! - subset: name/type containment check
//! - generate: schema from column dtypes
//! - update: in-place field replacement
//! - default-mode: NULLABLE for fields without a mode

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    default_mode, generate, normalize, run, run_cli, run_command, subset, update, CommandOutput,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_columns, read_input, read_schema, write_error, write_response};
