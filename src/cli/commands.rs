//! CLI command implementations
//!
//! Each command reads its documents, runs one reconcile operation and hands
//! back a [`CommandOutput`]. Rendering to stdout or to a file happens in
//! [`run_cli`] so the commands stay testable.

use std::path::Path;

use serde_json::{json, Value};

use crate::observability::{CommandScope, Logger};
use crate::schema::{
    add_default_nullable_mode, clean_schema_fields, generate_bq_schema_with_default,
    is_canonical_type, save_schema, schema_is_subset, to_pandas_gbq, update_schema, Schema,
};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{is_stdin, read_columns, read_schema, write_response};

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// A schema document
    Schema(Schema),
    /// Outcome of a subset check, with the local fields that had no match
    Subset { is_subset: bool, missing: Vec<String> },
}

impl CommandOutput {
    /// JSON body of the response
    pub fn to_json(&self) -> CliResult<Value> {
        match self {
            CommandOutput::Schema(schema) => Ok(serde_json::to_value(schema)?),
            CommandOutput::Subset { is_subset, missing } => Ok(json!({
                "is_subset": is_subset,
                "missing": missing,
            })),
        }
    }
}

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_cli(&cli)
}

/// Run a parsed command line: load config, dispatch, write the response
pub fn run_cli(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Logger::set_min_severity(config.severity());

    if cli.output.is_some() && !cli.command.produces_schema() {
        return Err(CliError::input_error(format!(
            "--output only applies to commands that produce a schema, not '{}'",
            cli.command.name()
        )));
    }

    let output = run_command(&cli.command, &config)?;
    let pretty = cli.pretty || config.pretty;

    match (&output, &cli.output) {
        (CommandOutput::Schema(schema), Some(path)) => {
            save_schema(path, schema)?;
            write_response(
                json!({
                    "path": path.display().to_string(),
                    "fields": schema.len(),
                }),
                pretty,
            )
        }
        _ => write_response(output.to_json()?, pretty),
    }
}

/// Dispatch one command, bracketed by begin/complete log events
pub fn run_command(cmd: &Command, config: &Config) -> CliResult<CommandOutput> {
    let scope = CommandScope::new(cmd.name());

    let result = match cmd {
        Command::Normalize { input } => normalize(input),
        Command::Subset {
            remote,
            local,
            strict,
        } => subset(remote, local, *strict),
        Command::Generate {
            input,
            default_type,
        } => {
            let default_type = default_type.as_deref().unwrap_or(&config.default_type);
            generate(input, default_type)
        }
        Command::Update { old, new } => update(old, new),
        Command::DefaultMode { input } => default_mode(input),
    };

    match &result {
        Ok(_) => scope.complete(),
        Err(e) => scope.fail(e.message()),
    }

    result
}

/// Upper-case type and mode of remote field representations
pub fn normalize(input: &Path) -> CliResult<CommandOutput> {
    let remote = read_schema(input)?;
    Ok(CommandOutput::Schema(to_pandas_gbq(remote.fields)))
}

/// Check whether the local schema is a subset of the remote one
pub fn subset(remote: &Path, local: &Path, strict: bool) -> CliResult<CommandOutput> {
    if is_stdin(remote) && is_stdin(local) {
        return Err(CliError::input_error(
            "stdin can only supply one of --remote and --local",
        ));
    }

    let schema_remote = read_schema(remote)?;
    let schema_local = read_schema(local)?;

    let is_subset = schema_is_subset(&schema_remote, &schema_local);

    let missing: Vec<String> = if is_subset {
        Vec::new()
    } else {
        let remote_keys = clean_schema_fields(&schema_remote.fields);
        schema_local
            .fields
            .iter()
            .filter(|field| !remote_keys.contains(&field.key()))
            .map(|field| field.name.clone())
            .collect()
    };

    if strict && !is_subset {
        return Err(CliError::not_subset(&missing));
    }

    Ok(CommandOutput::Subset { is_subset, missing })
}

/// Generate a schema from a column dtype document
pub fn generate(input: &Path, default_type: &str) -> CliResult<CommandOutput> {
    if !is_canonical_type(default_type) {
        return Err(CliError::input_error(format!(
            "Invalid default type: '{}'",
            default_type
        )));
    }

    let columns = read_columns(input)?;
    Ok(CommandOutput::Schema(generate_bq_schema_with_default(
        &columns,
        default_type,
    )))
}

/// Merge a new schema into an old one
pub fn update(old: &Path, new: &Path) -> CliResult<CommandOutput> {
    if is_stdin(old) && is_stdin(new) {
        return Err(CliError::input_error(
            "stdin can only supply one of --old and --new",
        ));
    }

    let schema_old = read_schema(old)?;
    let schema_new = read_schema(new)?;
    Ok(CommandOutput::Schema(update_schema(&schema_old, &schema_new)))
}

/// Fill in NULLABLE for fields without a mode
pub fn default_mode(input: &Path) -> CliResult<CommandOutput> {
    let schema = read_schema(input)?;
    Ok(CommandOutput::Schema(add_default_nullable_mode(&schema)))
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use crate::observability::{severity_guard, Severity};
    use crate::schema::load_schema;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_json(temp_dir: &TempDir, name: &str, value: Value) -> PathBuf {
        let path = temp_dir.path().join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn expect_schema(output: CommandOutput) -> Value {
        match output {
            CommandOutput::Schema(schema) => serde_json::to_value(schema).unwrap(),
            other => panic!("expected schema, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_uppercases() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(
            &temp_dir,
            "remote.json",
            json!([{"name": "a", "type": "integer", "mode": "nullable"}]),
        );

        let data = expect_schema(normalize(&input).unwrap());
        assert_eq!(
            data,
            json!({"fields": [{"name": "a", "type": "INTEGER", "mode": "NULLABLE"}]})
        );
    }

    #[test]
    fn test_subset_reports_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        let remote = write_json(
            &temp_dir,
            "remote.json",
            json!({"fields": [{"name": "x", "type": "INTEGER"}]}),
        );
        let local = write_json(
            &temp_dir,
            "local.json",
            json!({"fields": [
                {"name": "x", "type": "INTEGER"},
                {"name": "y", "type": "STRING"}
            ]}),
        );

        let output = subset(&remote, &local, false).unwrap();
        assert_eq!(
            output,
            CommandOutput::Subset {
                is_subset: false,
                missing: vec!["y".to_string()]
            }
        );
    }

    #[test]
    fn test_subset_strict_fails() {
        let temp_dir = TempDir::new().unwrap();
        let remote = write_json(&temp_dir, "remote.json", json!({"fields": []}));
        let local = write_json(
            &temp_dir,
            "local.json",
            json!({"fields": [{"name": "y", "type": "STRING"}]}),
        );

        let err = subset(&remote, &local, true).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotSubset);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_subset_rejects_double_stdin() {
        let err = subset(Path::new("-"), Path::new("-"), false).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InputError);
    }

    #[test]
    fn test_generate_with_config_default() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(
            &temp_dir,
            "cols.json",
            json!({"columns": [
                {"name": "n", "dtype": "int64"},
                {"name": "d", "dtype": "timedelta64[ns]"}
            ]}),
        );

        let config = Config {
            default_type: "BYTES".to_string(),
            ..Config::default()
        };
        let cmd = Command::Generate {
            input,
            default_type: None,
        };
        let data = expect_schema(run_command(&cmd, &config).unwrap());
        assert_eq!(
            data,
            json!({"fields": [
                {"name": "n", "type": "INTEGER"},
                {"name": "d", "type": "BYTES"}
            ]})
        );
    }

    #[test]
    fn test_generate_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(
            &temp_dir,
            "cols.json",
            json!({"columns": [{"name": "c", "dtype": "complex128"}]}),
        );

        let cmd = Command::Generate {
            input,
            default_type: Some("NUMERIC".to_string()),
        };
        let data = expect_schema(run_command(&cmd, &Config::default()).unwrap());
        assert_eq!(data["fields"][0]["type"], "NUMERIC");
    }

    #[test]
    fn test_generate_rejects_bad_default_type() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(&temp_dir, "cols.json", json!({"columns": []}));
        let err = generate(&input, "text").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InputError);
    }

    #[test]
    fn test_update_drops_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let old = write_json(
            &temp_dir,
            "old.json",
            json!({"fields": [
                {"name": "a", "type": "STRING"},
                {"name": "b", "type": "INTEGER"}
            ]}),
        );
        let new = write_json(
            &temp_dir,
            "new.json",
            json!({"fields": [
                {"name": "b", "type": "FLOAT"},
                {"name": "c", "type": "BOOLEAN"}
            ]}),
        );

        let data = expect_schema(update(&old, &new).unwrap());
        assert_eq!(
            data,
            json!({"fields": [
                {"name": "a", "type": "STRING"},
                {"name": "b", "type": "FLOAT"}
            ]})
        );
    }

    #[test]
    fn test_default_mode_command() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(
            &temp_dir,
            "s.json",
            json!({"fields": [{"name": "a", "type": "STRING"}]}),
        );

        let data = expect_schema(default_mode(&input).unwrap());
        assert_eq!(data["fields"][0]["mode"], "NULLABLE");
    }

    #[test]
    fn test_malformed_input_is_input_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(&temp_dir, "s.json", json!({"fields": [{"name": "a"}]}));

        let err = default_mode(&input).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InputError);
    }

    #[test]
    fn test_run_cli_writes_schema_to_output_file() {
        let _guard = severity_guard();
        let temp_dir = TempDir::new().unwrap();
        let input = write_json(
            &temp_dir,
            "s.json",
            json!({"fields": [
                {"name": "a", "type": "STRING"},
                {"name": "b", "type": "INTEGER", "mode": "REQUIRED"}
            ]}),
        );
        let config = write_json(
            &temp_dir,
            "gbq-schema.json",
            json!({"log_severity": "error", "pretty": true}),
        );
        let out = temp_dir.path().join("nested").join("out.json");

        let cli = Cli::parse_from([
            "gbq-schema",
            "default-mode",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]);
        let result = run_cli(&cli);
        let severity = Logger::min_severity();
        Logger::set_min_severity(Severity::Warn);

        result.unwrap();
        assert_eq!(severity, Severity::Error);

        let saved = load_schema(&out).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.field("a").unwrap().mode.as_deref(), Some("NULLABLE"));
        assert_eq!(saved.field("b").unwrap().mode.as_deref(), Some("REQUIRED"));
    }

    #[test]
    fn test_run_cli_rejects_output_for_subset() {
        let _guard = severity_guard();
        let temp_dir = TempDir::new().unwrap();
        let schema = write_json(&temp_dir, "s.json", json!({"fields": []}));
        let out = temp_dir.path().join("out.json");

        let cli = Cli::parse_from([
            "gbq-schema",
            "subset",
            "--remote",
            schema.to_str().unwrap(),
            "--local",
            schema.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);
        let err = run_cli(&cli).unwrap_err();

        assert_eq!(err.code(), &CliErrorCode::InputError);
        assert!(err.message().contains("subset"));
        assert!(!out.exists());
    }

    #[test]
    fn test_subset_output_json() {
        let output = CommandOutput::Subset {
            is_subset: true,
            missing: Vec::new(),
        };
        assert_eq!(
            output.to_json().unwrap(),
            json!({"is_subset": true, "missing": []})
        );
    }
}
