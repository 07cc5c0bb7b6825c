//! Command handlers for the CLI.

mod completions;
mod export;

pub use completions::handle_completions;
pub use export::{export_report, handle_export, submitted_values};
