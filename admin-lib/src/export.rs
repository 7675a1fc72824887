//! CSV extract of the captures table
//!
//! Consumes the same column definitions, lookups, and joined tags as the
//! table itself, so the extract always matches what the table shows.

use std::collections::HashMap;

use crate::model::Capture;
use crate::table::Column;
use crate::table::Lookup;
use crate::table::format_capture_cell;

/// Renders the given captures as CSV, one header row of column labels
/// followed by one row per capture, using the table's formatting rules.
pub fn captures_to_csv(
    columns: &[Column<Capture>],
    captures: &[Capture],
    species_lookup: &Lookup,
    tags_by_capture: &HashMap<u64, Vec<String>>,
) -> String {
    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .map(|column| csv_field(column.label))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for capture in captures {
        let empty = Vec::new();
        let tags = tags_by_capture.get(&capture.id).unwrap_or(&empty);
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                csv_field(&format_capture_cell(capture, species_lookup, tags, column).to_string())
            })
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quotes a field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
