//! CSV export of the visible grid.
//!
//! Tombstoned rows are filtered out by going through the session's
//! visible-row iterator rather than the raw snapshot.

use std::io::Write;

use gridbase_engine::GridSession;

use crate::error::IoError;

/// Write the visible rows as CSV with a header of column display names.
/// Returns the number of data rows written.
pub fn export_visible<W: Write>(writer: W, session: &GridSession) -> Result<usize, IoError> {
    let Some(table) = session.table() else {
        return Ok(0);
    };

    let mut out = csv::Writer::from_writer(writer);
    out.write_record(table.columns.iter().map(|c| c.name.as_str()))?;

    let mut written = 0usize;
    for (_, row) in session.visible_rows() {
        out.write_record(table.columns.iter().map(|c| {
            row.get(&c.id)
                .map(|v| v.to_string())
                .unwrap_or_default()
        }))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
