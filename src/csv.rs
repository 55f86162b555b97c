//! Generic record-to-CSV flattening.
//!
//! Columns are the lexicographically sorted union of every field name seen
//! across the items, so records with differing keys align instead of
//! breaking the sheet. Quoting is minimal: a cell is only wrapped when its
//! content would otherwise break a CSV parser.

use crate::models::ExportRecord;
use serde_json::Value;
use std::collections::BTreeSet;

/// Emitted instead of a headerless CSV when there is nothing to export.
/// Deliberately not parseable as CSV.
pub const EMPTY_SENTINEL: &str = "No rows found";

/// Flatten records into CSV text.
///
/// The header row is the sorted union of keys across all items and every
/// row is aligned to it, with empty cells where an item lacks a column.
/// Rows are newline-joined with no trailing newline.
pub fn to_csv(items: &[ExportRecord]) -> String {
    if items.is_empty() {
        return EMPTY_SENTINEL.to_string();
    }

    let mut headers = BTreeSet::new();
    for item in items {
        for key in item.keys() {
            headers.insert(key.as_str());
        }
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(headers.iter().copied().collect::<Vec<_>>().join(","));

    for item in items {
        let cells: Vec<String> = headers
            .iter()
            .map(|&header| render_cell(item.get(header)))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Render one cell. Precedence: missing or null becomes an empty cell,
/// objects and arrays become quoted compact JSON, strings containing a
/// comma, quote or newline are escaped and wrapped, everything else is
/// plain text.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value @ (Value::Object(_) | Value::Array(_))) => quote(&value.to_string()),
        Some(Value::String(s)) if s.contains(',') || s.contains('"') || s.contains('\n') => {
            quote(s)
        }
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
    }
}

/// Double embedded quotes, then wrap the whole cell.
fn quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}
