//! Change tracking over a table snapshot.
//!
//! The tracker owns the authoritative diff between the baseline snapshot
//! and the current in-memory edits: cell changes, row additions, and row
//! deletions. It never touches live table data - restoring visible values
//! after a rollback is the session's job.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::sql::{self, SqlStatement};
use crate::table::{CellKey, Row, TableSnapshot};
use crate::value::Value;

/// A tracked edit to one cell.
///
/// `original` is fixed at the first divergence from the baseline and never
/// updated by later edits to the same cell; only `updated` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    pub original: Value,
    pub updated: Value,
    pub at: DateTime<Utc>,
}

/// A row appended since the baseline was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowAddition {
    /// `temp_{n}`, unique within one tracker instance since the last
    /// baseline reset.
    pub temp_id: String,
    /// Row index at the time of addition.
    pub row: usize,
    pub data: Row,
    pub at: DateTime<Utc>,
}

/// A row marked for deletion. Doubles as the tombstone record: the row
/// stays physically present until commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDeletion {
    pub row: usize,
    /// Full row snapshot, kept so the deletion can be rolled back.
    pub data: Row,
    /// Primary-key value, or the row index when the schema has none.
    pub key: Value,
    pub at: DateTime<Utc>,
}

/// Aggregated view over all three change maps. Computed fresh on every
/// call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord {
    /// Sorted by (row, column).
    pub modified_cells: Vec<(CellKey, CellChange)>,
    /// Sorted by row index.
    pub added_rows: Vec<RowAddition>,
    /// Sorted by row index.
    pub deleted_rows: Vec<RowDeletion>,
    pub affected_rows: BTreeSet<usize>,
    pub total_changes: usize,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Counts-only variant of [`ChangeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeStatistics {
    pub modified_cells: usize,
    pub added_rows: usize,
    pub deleted_rows: usize,
    pub total_changes: usize,
    pub affected_rows: usize,
}

/// Human-readable description of pending changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSummary {
    pub description: String,
    pub details: Vec<String>,
    pub can_commit: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct ChangeTracker {
    baseline: Option<TableSnapshot>,
    cell_changes: FxHashMap<CellKey, CellChange>,
    row_additions: FxHashMap<usize, RowAddition>,
    row_deletions: FxHashMap<usize, RowDeletion>,
    next_temp_id: u64,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self {
            baseline: None,
            cell_changes: FxHashMap::default(),
            row_additions: FxHashMap::default(),
            row_deletions: FxHashMap::default(),
            next_temp_id: 1,
        }
    }

    /// Capture `snapshot` as the rollback baseline, clearing all change
    /// maps and resetting the temp-id counter. This is the only
    /// re-initialization path; no validation is performed.
    pub fn set_baseline(&mut self, snapshot: TableSnapshot) {
        self.baseline = Some(snapshot);
        self.cell_changes.clear();
        self.row_additions.clear();
        self.row_deletions.clear();
        self.next_temp_id = 1;
    }

    /// Extend the baseline with lazily loaded rows so later edits to them
    /// diff against what was actually fetched.
    pub fn extend_baseline(&mut self, rows: &[Row]) {
        if let Some(baseline) = self.baseline.as_mut() {
            baseline.rows.extend(rows.iter().cloned());
        }
    }

    pub fn baseline(&self) -> Result<&TableSnapshot, GridError> {
        self.baseline.as_ref().ok_or(GridError::NoBaseline)
    }

    /// Record one cell edit.
    ///
    /// When `updated` equals the tracked-or-supplied original the cell has
    /// round-tripped back to its baseline value and any record is removed.
    pub fn record_cell_change(
        &mut self,
        row: usize,
        column: &str,
        original: Value,
        updated: Value,
    ) {
        let key = CellKey::new(row, column);
        let first_original = self
            .cell_changes
            .get(&key)
            .map(|c| c.original.clone())
            .unwrap_or(original);

        if updated == first_original {
            self.cell_changes.remove(&key);
            return;
        }

        self.cell_changes.insert(
            key,
            CellChange {
                original: first_original,
                updated,
                at: Utc::now(),
            },
        );
    }

    /// Record an appended row. Re-recording the same index overwrites.
    pub fn record_row_addition(&mut self, row: usize, data: Row) -> &RowAddition {
        let temp_id = format!("temp_{}", self.next_temp_id);
        self.next_temp_id += 1;
        self.row_additions.insert(
            row,
            RowAddition {
                temp_id,
                row,
                data,
                at: Utc::now(),
            },
        );
        &self.row_additions[&row]
    }

    /// Record a row deletion, capturing the row's primary-key value from
    /// the baseline schema (falling back to the row index).
    pub fn record_row_deletion(&mut self, row: usize, data: Row) {
        let key = self
            .baseline
            .as_ref()
            .and_then(|b| b.primary_key_column())
            .map(|pk| data.get(&pk.id).cloned().unwrap_or(Value::Null))
            .unwrap_or(Value::Int(row as i64));

        self.row_deletions.insert(
            row,
            RowDeletion {
                row,
                data,
                key,
                at: Utc::now(),
            },
        );
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn cell_change(&self, row: usize, column: &str) -> Option<&CellChange> {
        self.cell_changes.get(&CellKey::new(row, column))
    }

    /// The value the cell had when tracking started: a tracked original if
    /// the cell was edited, else the baseline snapshot value.
    pub fn original_cell_value(&self, row: usize, column: &str) -> Option<Value> {
        if let Some(change) = self.cell_change(row, column) {
            return Some(change.original.clone());
        }
        self.baseline
            .as_ref()
            .and_then(|b| b.cell(row, column))
            .cloned()
    }

    pub fn is_new_row(&self, row: usize) -> bool {
        self.row_additions.contains_key(&row)
    }

    pub fn is_deleted_row(&self, row: usize) -> bool {
        self.row_deletions.contains_key(&row)
    }

    /// Linear scan over the cell-change keys; fine at UI scale.
    pub fn row_has_changes(&self, row: usize) -> bool {
        self.is_new_row(row)
            || self.is_deleted_row(row)
            || self.cell_changes.keys().any(|k| k.row == row)
    }

    pub fn has_changes(&self) -> bool {
        !self.cell_changes.is_empty()
            || !self.row_additions.is_empty()
            || !self.row_deletions.is_empty()
    }

    /// Sorted view of pending deletions.
    pub fn deleted_rows(&self) -> Vec<&RowDeletion> {
        let mut rows: Vec<&RowDeletion> = self.row_deletions.values().collect();
        rows.sort_by_key(|d| d.row);
        rows
    }

    /// Sorted view of pending additions.
    pub fn added_rows(&self) -> Vec<&RowAddition> {
        let mut rows: Vec<&RowAddition> = self.row_additions.values().collect();
        rows.sort_by_key(|a| a.row);
        rows
    }

    pub fn change_record(&self) -> ChangeRecord {
        let mut modified_cells: Vec<(CellKey, CellChange)> = self
            .cell_changes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        modified_cells.sort_by(|a, b| a.0.cmp(&b.0));

        let added_rows: Vec<RowAddition> = self.added_rows().into_iter().cloned().collect();
        let deleted_rows: Vec<RowDeletion> = self.deleted_rows().into_iter().cloned().collect();

        let mut affected_rows = BTreeSet::new();
        affected_rows.extend(modified_cells.iter().map(|(k, _)| k.row));
        affected_rows.extend(added_rows.iter().map(|a| a.row));
        affected_rows.extend(deleted_rows.iter().map(|d| d.row));

        let last_modified = self
            .cell_changes
            .values()
            .map(|c| c.at)
            .chain(self.row_additions.values().map(|a| a.at))
            .chain(self.row_deletions.values().map(|d| d.at))
            .max();

        let total_changes = modified_cells.len() + added_rows.len() + deleted_rows.len();

        ChangeRecord {
            modified_cells,
            added_rows,
            deleted_rows,
            affected_rows,
            total_changes,
            last_modified,
        }
    }

    pub fn statistics(&self) -> ChangeStatistics {
        let mut affected = BTreeSet::new();
        affected.extend(self.cell_changes.keys().map(|k| k.row));
        affected.extend(self.row_additions.keys().copied());
        affected.extend(self.row_deletions.keys().copied());

        ChangeStatistics {
            modified_cells: self.cell_changes.len(),
            added_rows: self.row_additions.len(),
            deleted_rows: self.row_deletions.len(),
            total_changes: self.cell_changes.len()
                + self.row_additions.len()
                + self.row_deletions.len(),
            affected_rows: affected.len(),
        }
    }

    pub fn summary(&self) -> ChangeSummary {
        let stats = self.statistics();
        let record = self.change_record();

        let mut parts = Vec::new();
        if stats.modified_cells > 0 {
            parts.push(format!("{} cell edit(s)", stats.modified_cells));
        }
        if stats.added_rows > 0 {
            parts.push(format!("{} row(s) added", stats.added_rows));
        }
        if stats.deleted_rows > 0 {
            parts.push(format!("{} row(s) deleted", stats.deleted_rows));
        }
        let description = if parts.is_empty() {
            "no pending changes".to_string()
        } else {
            format!("{} change(s): {}", stats.total_changes, parts.join(", "))
        };

        let mut details = Vec::new();
        for (key, change) in &record.modified_cells {
            details.push(format!(
                "row {}, column {}: '{}' -> '{}'",
                key.row, key.column, change.original, change.updated
            ));
        }
        for addition in &record.added_rows {
            details.push(format!("row {} added ({})", addition.row, addition.temp_id));
        }
        for deletion in &record.deleted_rows {
            details.push(format!("row {} deleted (key {})", deletion.row, deletion.key));
        }

        let mut warnings = Vec::new();
        if stats.deleted_rows > 0 {
            warnings.push(format!(
                "{} row(s) pending deletion will be removed on commit",
                stats.deleted_rows
            ));
        }

        ChangeSummary {
            description,
            details,
            can_commit: stats.total_changes > 0,
            warnings,
        }
    }

    // =========================================================================
    // Rollback
    // =========================================================================

    /// Clear all three change maps. The baseline is untouched; callers
    /// restore visible values via [`original_cell_value`] if needed.
    ///
    /// [`original_cell_value`]: ChangeTracker::original_cell_value
    pub fn rollback_all(&mut self) {
        self.cell_changes.clear();
        self.row_additions.clear();
        self.row_deletions.clear();
    }

    pub fn rollback_cell_change(&mut self, row: usize, column: &str) -> Option<CellChange> {
        self.cell_changes.remove(&CellKey::new(row, column))
    }

    pub fn rollback_row_addition(&mut self, row: usize) -> Option<RowAddition> {
        self.row_additions.remove(&row)
    }

    pub fn rollback_row_deletion(&mut self, row: usize) -> Option<RowDeletion> {
        self.row_deletions.remove(&row)
    }

    // =========================================================================
    // SQL generation
    // =========================================================================

    /// Generate parameterized statements for the accumulated diff.
    ///
    /// UPDATEs consolidate a row's cell changes into one statement and
    /// address the row by the baseline's primary-key value; rows that are
    /// also added or deleted get no UPDATE. DELETEs address rows the same
    /// way. Without a primary-key column, UPDATE and DELETE are omitted
    /// entirely - there is no safe way to address the rows. INSERTs carry
    /// the columns that have a defined value, minus auto-increment ones.
    pub fn statements(&self, table: &str) -> Vec<SqlStatement> {
        let Some(baseline) = self.baseline.as_ref() else {
            return Vec::new();
        };
        let pk = baseline.primary_key_column();

        let mut statements = Vec::new();
        let record = self.change_record();

        if let Some(pk) = pk {
            // Consolidate cell changes per row, in sorted order.
            let mut current_row: Option<usize> = None;
            let mut sets: Vec<(String, Value)> = Vec::new();

            let flush =
                |row: usize, sets: &mut Vec<(String, Value)>, statements: &mut Vec<SqlStatement>| {
                    if sets.is_empty() {
                        return;
                    }
                    if self.is_new_row(row) || self.is_deleted_row(row) {
                        sets.clear();
                        return;
                    }
                    // Address the row by its original key, even when the key
                    // column itself was edited.
                    let key_value = self
                        .original_cell_value(row, &pk.id)
                        .unwrap_or(Value::Int(row as i64));
                    statements.push(sql::update(table, sets, &pk.id, key_value));
                    sets.clear();
                };

            for (key, change) in &record.modified_cells {
                if current_row != Some(key.row) {
                    if let Some(row) = current_row {
                        flush(row, &mut sets, &mut statements);
                    }
                    current_row = Some(key.row);
                }
                sets.push((key.column.clone(), change.updated.clone()));
            }
            if let Some(row) = current_row {
                flush(row, &mut sets, &mut statements);
            }

            for deletion in &record.deleted_rows {
                statements.push(sql::delete(table, &pk.id, deletion.key.clone()));
            }
        }

        for addition in &record.added_rows {
            let mut columns = Vec::new();
            let mut values = Vec::new();
            for col in &baseline.columns {
                if col.auto_increment {
                    continue;
                }
                if let Some(value) = addition.data.get(&col.id) {
                    columns.push(col.id.as_str());
                    values.push(value.clone());
                }
            }
            if !columns.is_empty() {
                statements.push(sql::insert(table, &columns, values));
            }
        }

        statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnDef;
    use crate::table::row_from;

    fn users_snapshot() -> TableSnapshot {
        TableSnapshot::new(
            "users",
            vec![
                ColumnDef::new("id", "INTEGER").primary_key().auto_increment(),
                ColumnDef::new("name", "TEXT"),
                ColumnDef::new("email", "TEXT"),
            ],
        )
        .with_rows(vec![
            row_from(&[
                ("id", Value::Int(1)),
                ("name", Value::from("A")),
                ("email", Value::from("a@x.com")),
            ]),
            row_from(&[
                ("id", Value::Int(2)),
                ("name", Value::from("B")),
                ("email", Value::from("b@x.com")),
            ]),
        ])
    }

    fn tracker() -> ChangeTracker {
        let mut t = ChangeTracker::new();
        t.set_baseline(users_snapshot());
        t
    }

    #[test]
    fn test_first_original_is_preserved() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_cell_change(0, "name", Value::from("B"), Value::from("C"));

        let change = t.cell_change(0, "name").unwrap();
        assert_eq!(change.original, Value::from("A"));
        assert_eq!(change.updated, Value::from("C"));
        assert_eq!(t.statistics().modified_cells, 1);
    }

    #[test]
    fn test_revert_to_original_removes_record() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        assert!(t.has_changes());

        t.record_cell_change(0, "name", Value::from("B"), Value::from("A"));
        assert!(t.cell_change(0, "name").is_none());
        assert!(!t.has_changes());
    }

    #[test]
    fn test_recording_noop_change_is_ignored() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("A"));
        assert!(!t.has_changes());
    }

    #[test]
    fn test_temp_ids_are_monotonic_and_reset() {
        let mut t = tracker();
        let id1 = t.record_row_addition(2, Row::new()).temp_id.clone();
        let id2 = t.record_row_addition(3, Row::new()).temp_id.clone();
        assert_eq!(id1, "temp_1");
        assert_eq!(id2, "temp_2");

        t.set_baseline(users_snapshot());
        let id3 = t.record_row_addition(2, Row::new()).temp_id.clone();
        assert_eq!(id3, "temp_1");
    }

    #[test]
    fn test_addition_same_index_overwrites() {
        let mut t = tracker();
        t.record_row_addition(2, row_from(&[("name", Value::from("first"))]));
        t.record_row_addition(2, row_from(&[("name", Value::from("second"))]));

        assert_eq!(t.statistics().added_rows, 1);
        let record = t.change_record();
        assert_eq!(
            record.added_rows[0].data.get("name"),
            Some(&Value::from("second"))
        );
        assert_eq!(record.added_rows[0].temp_id, "temp_2");
    }

    #[test]
    fn test_deletion_captures_primary_key() {
        let mut t = tracker();
        let row = users_snapshot().rows[0].clone();
        t.record_row_deletion(0, row);

        let deleted = t.deleted_rows();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].key, Value::Int(1));
    }

    #[test]
    fn test_deletion_falls_back_to_row_index_without_pk() {
        let mut t = ChangeTracker::new();
        t.set_baseline(
            TableSnapshot::new("log", vec![ColumnDef::new("line", "TEXT")]).with_rows(vec![
                row_from(&[("line", Value::from("x"))]),
                row_from(&[("line", Value::from("y"))]),
            ]),
        );
        t.record_row_deletion(1, row_from(&[("line", Value::from("y"))]));
        assert_eq!(t.deleted_rows()[0].key, Value::Int(1));
    }

    #[test]
    fn test_statistics_totals() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_cell_change(0, "email", Value::from("a@x.com"), Value::from("b@y.com"));
        t.record_row_addition(2, Row::new());
        t.record_row_deletion(1, users_snapshot().rows[1].clone());

        let stats = t.statistics();
        assert_eq!(stats.modified_cells, 2);
        assert_eq!(stats.added_rows, 1);
        assert_eq!(stats.deleted_rows, 1);
        assert_eq!(
            stats.total_changes,
            stats.modified_cells + stats.added_rows + stats.deleted_rows
        );
        // Both edits hit row 0.
        assert_eq!(stats.affected_rows, 3);
    }

    #[test]
    fn test_rollback_all_clears_everything() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_row_addition(2, Row::new());
        t.record_row_deletion(1, users_snapshot().rows[1].clone());

        t.rollback_all();
        let record = t.change_record();
        assert!(record.modified_cells.is_empty());
        assert!(record.added_rows.is_empty());
        assert!(record.deleted_rows.is_empty());
        assert_eq!(record.total_changes, 0);
        assert!(record.last_modified.is_none());
        // Baseline survives a rollback.
        assert!(t.baseline().is_ok());
    }

    #[test]
    fn test_single_rollbacks() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_row_addition(2, Row::new());
        t.record_row_deletion(1, users_snapshot().rows[1].clone());

        assert!(t.rollback_cell_change(0, "name").is_some());
        assert!(t.rollback_cell_change(0, "name").is_none());
        assert!(t.rollback_row_addition(2).is_some());
        assert!(t.rollback_row_deletion(1).is_some());
        assert!(!t.has_changes());
    }

    #[test]
    fn test_original_cell_value_prefers_tracked_original() {
        let mut t = tracker();
        assert_eq!(t.original_cell_value(0, "name"), Some(Value::from("A")));

        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_cell_change(0, "name", Value::from("B"), Value::from("C"));
        assert_eq!(t.original_cell_value(0, "name"), Some(Value::from("A")));
    }

    #[test]
    fn test_row_has_changes_scans_all_maps() {
        let mut t = tracker();
        assert!(!t.row_has_changes(0));

        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_row_addition(2, Row::new());
        t.record_row_deletion(1, users_snapshot().rows[1].clone());

        assert!(t.row_has_changes(0));
        assert!(t.row_has_changes(1));
        assert!(t.row_has_changes(2));
        assert!(!t.row_has_changes(5));
    }

    #[test]
    fn test_baseline_required() {
        let t = ChangeTracker::new();
        assert!(matches!(t.baseline(), Err(GridError::NoBaseline)));
    }

    #[test]
    fn test_summary_mentions_pending_deletions() {
        let mut t = tracker();
        t.record_row_deletion(0, users_snapshot().rows[0].clone());

        let summary = t.summary();
        assert!(summary.can_commit);
        assert_eq!(summary.warnings.len(), 1);
        assert!(summary.warnings[0].contains("pending deletion"));

        t.rollback_all();
        let summary = t.summary();
        assert!(!summary.can_commit);
        assert_eq!(summary.description, "no pending changes");
    }

    #[test]
    fn test_update_statement_consolidates_row_sets() {
        let mut t = tracker();
        t.record_cell_change(0, "name", Value::from("A"), Value::from("B"));
        t.record_cell_change(0, "email", Value::from("a@x.com"), Value::from("b@y.com"));

        let statements = t.statements("users");
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].sql,
            "UPDATE \"users\" SET \"email\" = ?, \"name\" = ? WHERE \"id\" = ?"
        );
        assert_eq!(
            statements[0].params,
            vec![Value::from("b@y.com"), Value::from("B"), Value::Int(1)]
        );
    }

    #[test]
    fn test_update_where_uses_original_key_value() {
        let mut t = ChangeTracker::new();
        t.set_baseline(
            TableSnapshot::new(
                "tags",
                vec![ColumnDef::new("tag", "TEXT").primary_key(), ColumnDef::new("hits", "INTEGER")],
            )
            .with_rows(vec![row_from(&[
                ("tag", Value::from("old")),
                ("hits", Value::Int(1)),
            ])]),
        );

        // Edit the key column itself.
        t.record_cell_change(0, "tag", Value::from("old"), Value::from("new"));
        let statements = t.statements("tags");
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].params,
            vec![Value::from("new"), Value::from("old")]
        );
    }

    #[test]
    fn test_no_delete_statement_without_primary_key() {
        let mut t = ChangeTracker::new();
        t.set_baseline(
            TableSnapshot::new("log", vec![ColumnDef::new("line", "TEXT")])
                .with_rows(vec![row_from(&[("line", Value::from("x"))])]),
        );
        t.record_row_deletion(0, row_from(&[("line", Value::from("x"))]));

        assert!(t.statements("log").is_empty());
    }

    #[test]
    fn test_deleted_row_gets_no_update() {
        let mut t = tracker();
        t.record_cell_change(1, "name", Value::from("B"), Value::from("Z"));
        t.record_row_deletion(1, users_snapshot().rows[1].clone());

        let statements = t.statements("users");
        assert_eq!(statements.len(), 1);
        assert!(statements[0].sql.starts_with("DELETE"));
        assert_eq!(statements[0].params, vec![Value::Int(2)]);
    }

    #[test]
    fn test_insert_skips_auto_increment_columns() {
        let mut t = tracker();
        t.record_row_addition(
            2,
            row_from(&[
                ("id", Value::Null),
                ("name", Value::from("C")),
                ("email", Value::from("c@x.com")),
            ]),
        );

        let statements = t.statements("users");
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].sql,
            "INSERT INTO \"users\" (\"name\", \"email\") VALUES (?, ?)"
        );
        assert_eq!(
            statements[0].params,
            vec![Value::from("C"), Value::from("c@x.com")]
        );
    }

    #[test]
    fn test_insert_restricted_to_defined_values() {
        let mut t = tracker();
        // Only name is defined; email absent from the row map.
        t.record_row_addition(2, row_from(&[("name", Value::from("C"))]));

        let statements = t.statements("users");
        assert_eq!(statements.len(), 1);
        assert_eq!(
            statements[0].sql,
            "INSERT INTO \"users\" (\"name\") VALUES (?)"
        );
    }
}
