//! Output formatting for calculated blocks.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{batch_csv, reports_csv};
pub use json::to_json;
pub use terminal::{batch_text, format_field, report_text};
