//! Observability subsystem
//!
//! Structured JSON logging of typed events. Logging never affects results:
//! a failed write to stderr is ignored.
//!
//! ```ignore
//! use gbq_schema::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemaLoaded, &[("path", "schema.json")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::CommandScope;

#[cfg(test)]
pub(crate) use logger::severity_guard;

/// Log an event with fields at INFO (ERROR for failure events)
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}

/// Severity an event is logged at by [`log_event_with_fields`]
pub fn event_severity(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    }
}
