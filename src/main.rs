//! gbq-schema CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints errors as JSON and
//! exits non-zero on failure. All logic lives in `cli`.

use gbq_schema::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(e.code_str(), e.message());
        std::process::exit(e.exit_code());
    }
}
