//! FILENAME: core/interchange/src/csv_writer.rs
//! PURPOSE: Serializes record rows into quoted, CRLF-delimited CSV text.
//! CONTEXT: The header line is the field sequence of the first row - all
//! rows of a dataset share one field set, an invariant owned by the
//! loader, not re-validated here. Empty input is the `NothingToExport`
//! condition the caller surfaces as a user notice.

use std::fs;
use std::path::Path;

use catalog::ScriptRecord;
use chrono::{SecondsFormat, Utc};

use crate::error::InterchangeError;

/// Wraps a field value in double quotes, doubling embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serializes rows into CSV text: quoted fields, CRLF line endings,
/// header taken from the first row's field order.
pub fn to_delimited_text(rows: &[&ScriptRecord]) -> Result<String, InterchangeError> {
    let first = rows.first().ok_or(InterchangeError::NothingToExport)?;
    let keys: Vec<&str> = first.field_names().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(keys.join(","));
    for row in rows {
        let line = keys
            .iter()
            .map(|key| quote_field(row.value(key).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    Ok(lines.join("\r\n"))
}

/// Builds a collision-free export file name: `<prefix>_<timestamp>.csv`.
/// The timestamp is UTC ISO-8601 with `:` and `.` replaced by `-`.
pub fn export_filename(prefix: &str) -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}_{}.csv", prefix, stamp)
}

/// Writes rows as CSV to the given path.
pub fn write_csv(path: &Path, rows: &[&ScriptRecord]) -> Result<(), InterchangeError> {
    let text = to_delimited_text(rows)?;
    fs::write(path, text)?;
    Ok(())
}
