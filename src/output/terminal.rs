//! Terminal output utilities.
//!
//! Provides formatting helpers for human readable output.

use crate::processing::{BatchEntry, BatchOutcome, CidrReport};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");
    format!("{quoted:>width$}")
}

/// Render a report as `label: value` lines with aligned values.
pub fn report_text(report: &CidrReport) -> String {
    let fields = report.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    fields
        .into_iter()
        .map(|(label, value)| {
            let padded = format!("{label:<width$}");
            format!("{}: {value}", padded.cyan())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render every batch entry, reports separated by a blank line.
pub fn batch_text(entries: &[BatchEntry]) -> String {
    entries
        .iter()
        .map(|entry| match &entry.outcome {
            BatchOutcome::Ok { report } => report_text(report),
            BatchOutcome::Error { message, .. } => format!(
                "{} [{}] {}: {message}",
                "error".on_red(),
                entry.index,
                entry.input
            ),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CidrBlock;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_escapes_quotes() {
        assert_eq!(format_field("a\"b", 0), "\"a\"\"b\"");
    }

    #[test]
    fn test_report_text() {
        colored::control::set_override(false);
        let block = CidrBlock::parse("91.124.230.205/30").unwrap();
        let text = report_text(&CidrReport::from_block(&block));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "cidr              : 91.124.230.205/30");
        assert!(lines.contains(&"network           : 91.124.230.204"));
        assert!(lines.contains(&"usable_hosts      : 2"));
        assert!(lines.contains(&"private           : false"));
    }
}
