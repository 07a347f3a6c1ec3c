//! CLI-specific error types

use std::fmt;
use std::io;

use crate::frame::FrameError;
use crate::schema::{SchemaError, SchemaErrorCode};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/files)
    IoError,
    /// Input document rejected
    InputError,
    /// Local schema is not a subset of the remote one (strict mode)
    NotSubset,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "GBQ_CLI_CONFIG_ERROR",
            Self::IoError => "GBQ_CLI_IO_ERROR",
            Self::InputError => "GBQ_CLI_INPUT_ERROR",
            Self::NotSubset => "GBQ_CLI_NOT_SUBSET",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    pub fn not_subset(missing: &[String]) -> Self {
        Self::new(
            CliErrorCode::NotSubset,
            format!(
                "Local schema is not a subset of the remote schema; unmatched fields: {}",
                missing.join(", ")
            ),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit code: 2 for a failed strict subset check, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self.code {
            CliErrorCode::NotSubset => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        match e.code() {
            SchemaErrorCode::GbqSchemaIo => Self::io_error(e.to_string()),
            SchemaErrorCode::GbqSchemaMalformed => Self::input_error(e.to_string()),
        }
    }
}

impl From<FrameError> for CliError {
    fn from(e: FrameError) -> Self {
        Self::input_error(format!("{}: {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
