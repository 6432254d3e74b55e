//! Snapshot persistence as JSON files.

use std::fs;
use std::path::Path;

use gridbase_engine::TableSnapshot;

use crate::error::IoError;

pub fn save_snapshot(path: &Path, snapshot: &TableSnapshot) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<TableSnapshot, IoError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gridbase_engine::table::row_from;
    use gridbase_engine::{ColumnDef, Value};

    #[test]
    fn test_snapshot_file_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let snapshot = TableSnapshot::new(
            "events",
            vec![
                ColumnDef::new("id", "INTEGER").primary_key(),
                ColumnDef::new("at", "TIMESTAMP"),
            ],
        )
        .with_rows(vec![row_from(&[
            ("id", Value::Int(1)),
            ("at", Value::Timestamp(ts)),
        ])]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        save_snapshot(&path, &snapshot).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, snapshot);
        // Typed values survive the file round trip exactly.
        assert_eq!(loaded.cell(0, "at"), Some(&Value::Timestamp(ts)));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_snapshot(Path::new("/nonexistent/snap.json")),
            Err(IoError::Io(_))
        ));
    }
}
