//! CLI argument definitions using clap
//!
//! Commands:
//! - gbq-schema normalize <remote.json>
//! - gbq-schema subset --remote <a.json> --local <b.json> [--strict]
//! - gbq-schema generate <columns.json> [--default-type T]
//! - gbq-schema update --old <a.json> --new <b.json>
//! - gbq-schema default-mode <schema.json>
//!
//! Every input path accepts `-` for stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gbq-schema - reconcile dataframe column types with BigQuery table schemas
#[derive(Parser, Debug)]
#[command(name = "gbq-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Write the resulting schema to this file instead of stdout
    /// (schema-producing commands only)
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upper-case type and mode of remote API field representations
    Normalize {
        /// Remote fields: array of API representations, or a schema document
        input: PathBuf,
    },

    /// Check that every local field (name and type) exists remotely
    Subset {
        /// Schema of the existing remote table
        #[arg(long)]
        remote: PathBuf,

        /// Schema about to be uploaded
        #[arg(long)]
        local: PathBuf,

        /// Fail with exit code 2 when the local schema is not a subset
        #[arg(long)]
        strict: bool,
    },

    /// Generate a schema from dataframe column dtypes
    Generate {
        /// Column document: {"columns": [{"name": ..., "dtype": ...}]}
        input: PathBuf,

        /// Type for dtypes without a mapping (overrides the config file)
        #[arg(long)]
        default_type: Option<String>,
    },

    /// Replace fields of an old schema with same-named fields of a new one
    Update {
        /// Schema to update
        #[arg(long)]
        old: PathBuf,

        /// Schema whose fields replace the old ones
        #[arg(long)]
        new: PathBuf,
    },

    /// Set mode NULLABLE on every field that has no mode
    DefaultMode {
        /// Schema document
        input: PathBuf,
    },
}

impl Command {
    /// Name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::Normalize { .. } => "normalize",
            Command::Subset { .. } => "subset",
            Command::Generate { .. } => "generate",
            Command::Update { .. } => "update",
            Command::DefaultMode { .. } => "default-mode",
        }
    }

    /// Returns true if the command's result is a schema document
    pub fn produces_schema(&self) -> bool {
        !matches!(self, Command::Subset { .. })
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subset() {
        let cli = Cli::parse_from([
            "gbq-schema",
            "subset",
            "--remote",
            "remote.json",
            "--local",
            "-",
            "--strict",
        ]);
        match cli.command {
            Command::Subset { remote, local, strict } => {
                assert_eq!(remote, PathBuf::from("remote.json"));
                assert_eq!(local, PathBuf::from("-"));
                assert!(strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_default_mode_with_globals() {
        let cli = Cli::parse_from(["gbq-schema", "default-mode", "s.json", "--pretty", "-o", "out.json"]);
        assert!(cli.pretty);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.command.name(), "default-mode");
    }

    #[test]
    fn test_only_subset_has_no_schema_output() {
        let subset = Cli::parse_from(["gbq-schema", "subset", "--remote", "a", "--local", "b"]);
        let update = Cli::parse_from(["gbq-schema", "update", "--old", "a", "--new", "b"]);
        assert!(!subset.command.produces_schema());
        assert!(update.command.produces_schema());
    }

    #[test]
    fn test_parse_generate_default_type() {
        let cli = Cli::parse_from(["gbq-schema", "generate", "cols.json", "--default-type", "BYTES"]);
        match cli.command {
            Command::Generate { default_type, .. } => {
                assert_eq!(default_type.as_deref(), Some("BYTES"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
