//! JSON I/O handling for the CLI
//!
//! - Input: one JSON document per path argument, `-` reads stdin
//! - Output: one JSON object on stdout, `{"status": "ok", "data": ...}`
//!   or `{"status": "error", "code": ..., "message": ...}`

use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::frame::ColumnTypes;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{load_schema, parse_schema, Schema};

use super::errors::{CliError, CliResult};

/// Returns true if the path argument means stdin
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a whole input document from a file or stdin
pub fn read_input(path: &Path) -> CliResult<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        if content.trim().is_empty() {
            return Err(CliError::io_error("Empty input on stdin"));
        }
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read '{}': {}", path.display(), e))
    })
}

/// Read a schema document from a file or stdin
pub fn read_schema(path: &Path) -> CliResult<Schema> {
    if is_stdin(path) {
        let content = read_input(path)?;
        return Ok(parse_schema(&content)?);
    }
    Ok(load_schema(path)?)
}

/// Read a column dtype document from a file or stdin
pub fn read_columns(path: &Path) -> CliResult<ColumnTypes> {
    let content = read_input(path)?;
    let columns = ColumnTypes::from_json(&content)?;

    let count = columns.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::ColumnsLoaded,
        &[("columns", count.as_str()), ("path", path_str.as_str())],
    );

    Ok(columns)
}

/// Write a success response to stdout
pub fn write_response(data: Value, pretty: bool) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, &response)?;
    } else {
        serde_json::to_writer(&mut stdout, &response)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_dash_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("-schema.json")));
        assert!(!is_stdin(&PathBuf::from("schema.json")));
    }

    #[test]
    fn test_read_schema_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("s.json");
        fs::write(&path, r#"[{"name": "a", "type": "STRING"}]"#).unwrap();

        let schema = read_schema(&path).unwrap();
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_input(&temp_dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code_str(), "GBQ_CLI_IO_ERROR");
    }

    #[test]
    fn test_read_schema_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_schema(&temp_dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code_str(), "GBQ_CLI_IO_ERROR");
        assert!(err.message().contains("absent.json"));
    }

    #[test]
    fn test_read_schema_malformed_file_is_input_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"{"fields": [{"name": "a"}]}"#).unwrap();

        let err = read_schema(&path).unwrap_err();
        assert_eq!(err.code_str(), "GBQ_CLI_INPUT_ERROR");
    }

    #[test]
    fn test_read_columns_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cols.json");
        fs::write(&path, r#"{"columns": [{"name": "n", "dtype": "int64"}]}"#).unwrap();

        let columns = read_columns(&path).unwrap();
        assert_eq!(columns.len(), 1);
    }
}
