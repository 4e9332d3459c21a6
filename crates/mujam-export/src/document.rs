use mujam_core::Entry;

use crate::csv::{self, BOM, HEADER};
use crate::error::ExportError;

/// Render every entry as the full-export CSV document (BOM, header, one row
/// per entry), same shape and encoding as the backup artifact.
pub fn to_csv(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&csv::format_row(
            &entry.keyword,
            &entry.meaning,
            &entry.example,
        ));
    }
    out
}

/// Render every entry as pretty JSON, the full record including notes.
pub fn to_json(entries: &[Entry]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
