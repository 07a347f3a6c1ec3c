//! Schema error types
//!
//! Error codes:
//! - GBQ_SCHEMA_MALFORMED: document is not a schema (bad JSON, missing name/type)
//! - GBQ_SCHEMA_IO: schema file could not be read or written
//!
//! The reconcile operations themselves never fail; errors only arise at the
//! boundary where documents are parsed or persisted.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Document could not be parsed as a schema
    GbqSchemaMalformed,
    /// Schema file could not be read or written
    GbqSchemaIo,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::GbqSchemaMalformed => "GBQ_SCHEMA_MALFORMED",
            SchemaErrorCode::GbqSchemaIo => "GBQ_SCHEMA_IO",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Source path if the document came from a file
    path: Option<String>,
}

impl SchemaError {
    /// Create an error for a document that is not a valid schema
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::GbqSchemaMalformed,
            message: reason.into(),
            path: None,
        }
    }

    /// Create an error for a malformed schema file
    pub fn malformed_file(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            code: SchemaErrorCode::GbqSchemaMalformed,
            message: format!("Malformed schema file '{}': {}", path, reason.into()),
            path: Some(path),
        }
    }

    /// Create an error for a file that could not be read or written
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            code: SchemaErrorCode::GbqSchemaIo,
            message: format!("Schema file '{}': {}", path, reason.into()),
            path: Some(path),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the file path if applicable
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed(format!("Invalid schema JSON: {}", e))
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::GbqSchemaMalformed.code(), "GBQ_SCHEMA_MALFORMED");
        assert_eq!(SchemaErrorCode::GbqSchemaIo.code(), "GBQ_SCHEMA_IO");
    }

    #[test]
    fn test_file_errors_carry_path() {
        let err = SchemaError::io("/tmp/schema.json", "permission denied");
        assert_eq!(err.path(), Some("/tmp/schema.json"));
        assert_eq!(err.code(), SchemaErrorCode::GbqSchemaIo);

        let display = format!("{}", err);
        assert!(display.starts_with("GBQ_SCHEMA_IO"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaError::from(parse_err);
        assert_eq!(err.code(), SchemaErrorCode::GbqSchemaMalformed);
        assert!(err.path().is_none());
    }
}
