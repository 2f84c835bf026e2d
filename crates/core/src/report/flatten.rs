//! Report row flattening.

use super::types::ReportRow;

/// Flattens a nested row tree into an ordered list of non-section rows.
///
/// Section rows are unwrapped into their children and omitted from the
/// output; every other row is emitted in original document order. Nesting
/// depth is bounded by the report structure (2-3 levels in practice).
#[must_use]
pub fn flatten_rows(rows: &[ReportRow]) -> Vec<&ReportRow> {
    let mut flat = Vec::with_capacity(rows.len());
    collect(rows, &mut flat);
    flat
}

fn collect<'a>(rows: &'a [ReportRow], flat: &mut Vec<&'a ReportRow>) {
    for row in rows {
        match row {
            ReportRow::Section { rows, .. } => collect(rows, flat),
            other => flat.push(other),
        }
    }
}
