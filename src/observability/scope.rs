//! CommandScope for automatic begin/complete logging
//!
//! - Logs COMMAND_BEGIN on creation
//! - Logs COMMAND_COMPLETE on `complete()`
//! - Logs COMMAND_FAILED on `fail()`
//! - Logs a warning if dropped without either

use std::cell::Cell;
use std::time::Instant;

use super::events::Event;
use super::logger::Logger;

/// A scope that brackets one CLI command with begin/complete events
///
/// ```ignore
/// let scope = CommandScope::new("subset");
/// // ... do work ...
/// scope.complete(); // logs COMMAND_COMPLETE with elapsed_ms
/// ```
pub struct CommandScope<'a> {
    command: &'a str,
    started: Instant,
    completed: Cell<bool>,
}

impl<'a> CommandScope<'a> {
    /// Create a new scope, logging COMMAND_BEGIN at INFO
    pub fn new(command: &'a str) -> Self {
        Logger::info(Event::CommandBegin.as_str(), &[("command", command)]);

        Self {
            command,
            started: Instant::now(),
            completed: Cell::new(false),
        }
    }

    /// Milliseconds since the scope was opened
    pub fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }

    /// Mark the command as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the command as completed, with additional fields
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.elapsed_ms();

        let mut fields: Vec<(&str, &str)> =
            vec![("command", self.command), ("elapsed_ms", elapsed.as_str())];
        fields.extend(extra_fields.iter().copied());

        Logger::info(Event::CommandComplete.as_str(), &fields);
    }

    /// Mark the command as failed, logging COMMAND_FAILED at ERROR
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        Logger::error(
            Event::CommandFailed.as_str(),
            &[("command", self.command), ("reason", reason)],
        );
    }

    /// Check if the scope has been completed or failed
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }
}

impl Drop for CommandScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            Logger::warn(
                Event::CommandIncomplete.as_str(),
                &[
                    ("command", self.command),
                    ("reason", "scope dropped without completion"),
                ],
            );
        }
    }
}
