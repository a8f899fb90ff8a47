//! Command-line interfaces for `analyse-data` and `extract-patterns`.

mod commands;
mod extract;

pub use commands::{is_verbose, run, Mode, ModeError, OutputFormat};
pub use extract::run_extract;
