//! Observable events
//!
//! Events are explicit and typed; the logger only ever sees their string form.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded
    ConfigLoaded,

    // Schema documents
    /// Schema document parsed
    SchemaLoaded,
    /// Schema document written
    SchemaSaved,
    /// Column dtype document parsed
    ColumnsLoaded,

    // Reconciliation
    /// `update_schema` discarded new fields with no counterpart in the old schema
    FieldsDropped,
    /// `generate_bq_schema` used the default type for an unmapped dtype
    DefaultTypeApplied,

    // Commands
    /// CLI command begins
    CommandBegin,
    /// CLI command finished
    CommandComplete,
    /// CLI command failed
    CommandFailed,
    /// Command scope dropped before it completed or failed
    CommandIncomplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::SchemaSaved => "SCHEMA_SAVED",
            Event::ColumnsLoaded => "COLUMNS_LOADED",

            Event::FieldsDropped => "FIELDS_DROPPED",
            Event::DefaultTypeApplied => "DEFAULT_TYPE_APPLIED",

            Event::CommandBegin => "COMMAND_BEGIN",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
            Event::CommandIncomplete => "COMMAND_INCOMPLETE",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::CommandFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
