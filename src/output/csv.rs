//! CSV output formatting for calculated blocks.

use super::terminal::format_field;
use crate::processing::{BatchEntry, BatchOutcome, CidrReport};

const HEADER: &str = r#" "cnt",              "cidr",        "network",      "broadcast",    "subnet_mask",   "first_usable",    "last_usable", "usable_hosts", "class", "private", "error""#;

/// Render reports as CSV with a header row.
pub fn reports_csv(reports: &[CidrReport]) -> String {
    let mut out = vec![HEADER.to_string()];
    for (i, report) in reports.iter().enumerate() {
        out.push(csv_row(i, Some(report), ""));
    }
    out.join("\n")
}

/// Render batch entries as CSV; failed entries carry the error message.
pub fn batch_csv(entries: &[BatchEntry]) -> String {
    let mut out = vec![HEADER.to_string()];
    for entry in entries {
        let row = match &entry.outcome {
            BatchOutcome::Ok { report } => csv_row(entry.index, Some(report), ""),
            BatchOutcome::Error { message, .. } => csv_row(entry.index, None, message),
        };
        out.push(row);
    }
    out.join("\n")
}

/// Render a single CSV row.
fn csv_row(j: usize, report: Option<&CidrReport>, error: &str) -> String {
    let empty = String::new();
    let field = |f: fn(&CidrReport) -> String| report.map(f).unwrap_or_else(|| empty.clone());
    format!(
        r#"{j},{cidr},{network},{broadcast},{mask},{first},{last},{hosts},{class},{private},{error}"#,
        j = format_field(j, 6),
        cidr = format_field(field(|r| r.cidr.clone()), 19),
        network = format_field(field(|r| r.network.clone()), 16),
        broadcast = format_field(field(|r| r.broadcast.clone()), 16),
        mask = format_field(field(|r| r.subnet_mask.clone()), 16),
        first = format_field(field(|r| r.first_usable.clone()), 16),
        last = format_field(field(|r| r.last_usable.clone()), 16),
        hosts = format_field(field(|r| r.usable_hosts.to_string()), 14),
        class = format_field(field(|r| r.class.to_string()), 7),
        private = format_field(field(|r| r.private.to_string()), 9),
        error = format_field(error, 7),
    )
}
