//! Grid session: cell edit lifecycle, bulk operations, copy/paste, and
//! pagination over one table snapshot.
//!
//! The session owns the live snapshot and delegates diff bookkeeping to
//! [`ChangeTracker`] and value checks to [`CellValidator`]. Deleted rows
//! are tombstones until [`GridSession::commit_changes`] physically removes
//! them; anything that renders or exports rows goes through
//! [`GridSession::visible_rows`].

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::column::ColumnDef;
use crate::debounce::Debouncer;
use crate::error::GridError;
use crate::events::{ValidationCallback, ValidationEvent};
use crate::sql::SqlStatement;
use crate::table::{CellKey, Row, TableSnapshot};
use crate::tracker::{ChangeRecord, ChangeStatistics, ChangeSummary, ChangeTracker};
use crate::validate::{CellValidator, ValidationOutcome};
use crate::value::Value;

/// Default delay before an in-flight edit is validated.
pub const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(250);

/// An in-flight edit for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    pub original: Value,
    pub edited: Value,
    pub dirty: bool,
    pub valid: bool,
}

/// One page of rows from the underlying result set.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPage {
    pub rows: Vec<Row>,
    pub total_rows: usize,
}

/// Seam to whatever actually fetches rows (database driver, test stub).
pub trait RowProvider {
    fn fetch(&mut self, offset: usize, limit: usize) -> Result<RowPage, GridError>;
}

/// Where a bulk update gets each row's new value.
pub enum BulkSource {
    Fixed(Value),
    Compute(Box<dyn Fn(&Row, usize) -> Value>),
}

impl std::fmt::Debug for BulkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkSource::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            BulkSource::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}

/// A bulk update over an explicit list of row indices.
///
/// Indices are processed in the order given; duplicates are processed
/// twice. The optional condition filters rows before the value is
/// computed.
pub struct BulkUpdate {
    pub column: String,
    pub rows: Vec<usize>,
    pub source: BulkSource,
    pub condition: Option<Box<dyn Fn(&Row) -> bool>>,
}

impl BulkUpdate {
    pub fn fixed(column: impl Into<String>, rows: Vec<usize>, value: Value) -> Self {
        Self {
            column: column.into(),
            rows,
            source: BulkSource::Fixed(value),
            condition: None,
        }
    }

    pub fn computed(
        column: impl Into<String>,
        rows: Vec<usize>,
        f: impl Fn(&Row, usize) -> Value + 'static,
    ) -> Self {
        Self {
            column: column.into(),
            rows,
            source: BulkSource::Compute(Box::new(f)),
            condition: None,
        }
    }

    pub fn with_condition(mut self, f: impl Fn(&Row) -> bool + 'static) -> Self {
        self.condition = Some(Box::new(f));
        self
    }
}

pub enum BulkOperation {
    Update(BulkUpdate),
    Delete { rows: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub affected_rows: usize,
}

/// One cell a bulk update would change.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPreviewEntry {
    pub row: usize,
    pub column: String,
    pub current: Value,
    pub proposed: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    SingleCell,
    Range,
}

/// A copied block of cells, always a dense rectangle.
///
/// Multi-cell copies deduplicate the row and column axes independently,
/// so a non-rectangular selection densifies over union(rows) x
/// union(columns). Paste consumes the same payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPayload {
    pub kind: CopyKind,
    pub data: Vec<Vec<Value>>,
}

impl CopyPayload {
    /// Tab/newline-delimited text for the system clipboard. Lossy for
    /// values containing the delimiters; they are not escaped.
    pub fn to_text(&self) -> String {
        self.data
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse clipboard text back into a payload.
    pub fn from_text(text: &str) -> Self {
        let data: Vec<Vec<Value>> = text
            .lines()
            .map(|line| line.split('\t').map(Value::from_input).collect())
            .collect();
        let kind = if data.len() == 1 && data[0].len() == 1 {
            CopyKind::SingleCell
        } else {
            CopyKind::Range
        };
        Self { kind, data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOptions {
    /// Append new rows when the paste runs past the last loaded row.
    pub auto_expand_rows: bool,
    /// Collect validation failures and keep going instead of stopping at
    /// the first one.
    pub skip_validation_errors: bool,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            auto_expand_rows: false,
            skip_validation_errors: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasteOutcome {
    pub affected_cells: usize,
    pub validation_errors: Vec<String>,
}

/// One editing session over one table.
pub struct GridSession {
    validator: CellValidator,
    tracker: ChangeTracker,
    table: Option<TableSnapshot>,
    edits: FxHashMap<CellKey, ActiveEdit>,
    validation_cache: FxHashMap<(String, Value), ValidationOutcome>,
    debounce: Debouncer,
    callbacks: Vec<ValidationCallback>,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSession {
    pub fn new() -> Self {
        Self::with_validation_delay(DEFAULT_VALIDATION_DELAY)
    }

    pub fn with_validation_delay(delay: Duration) -> Self {
        Self {
            validator: CellValidator::new(),
            tracker: ChangeTracker::new(),
            table: None,
            edits: FxHashMap::default(),
            validation_cache: FxHashMap::default(),
            debounce: Debouncer::new(delay),
            callbacks: Vec::new(),
        }
    }

    /// Register a callback for debounced validation results.
    pub fn on_validation(&mut self, callback: ValidationCallback) {
        self.callbacks.push(callback);
    }

    /// Replace the loaded table wholesale and re-baseline change tracking.
    pub fn set_table(&mut self, snapshot: TableSnapshot) {
        self.tracker.set_baseline(snapshot.clone());
        self.table = Some(snapshot);
        self.edits.clear();
        self.validation_cache.clear();
        self.debounce.clear();
    }

    pub fn table(&self) -> Option<&TableSnapshot> {
        self.table.as_ref()
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.row_count()).unwrap_or(0)
    }

    pub fn cell_value(&self, row: usize, column: &str) -> Option<&Value> {
        self.table.as_ref().and_then(|t| t.cell(row, column))
    }

    /// Rows that have not been tombstoned. Render and export paths must
    /// use this instead of the raw snapshot.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> + '_ {
        self.table
            .iter()
            .flat_map(|t| t.rows.iter().enumerate())
            .filter(|(i, _)| !self.tracker.is_deleted_row(*i))
    }

    fn table_ref(&self) -> Result<&TableSnapshot, GridError> {
        self.table.as_ref().ok_or(GridError::NoTable)
    }

    fn table_mut(&mut self) -> Result<&mut TableSnapshot, GridError> {
        self.table.as_mut().ok_or(GridError::NoTable)
    }

    fn editable_column(&self, column: &str) -> Result<ColumnDef, GridError> {
        let table = self.table_ref()?;
        let col = table
            .column(column)
            .ok_or_else(|| GridError::UnknownColumn(column.to_string()))?;
        if let Some(reason) = col.non_editable_reason() {
            return Err(GridError::NonEditableColumn {
                column: column.to_string(),
                reason: reason.to_string(),
            });
        }
        Ok(col.clone())
    }

    // =========================================================================
    // Cell edit lifecycle
    // =========================================================================

    /// Start editing a cell. Fails if no table is loaded, the column is
    /// unknown or non-editable, the row is out of range, or the cell
    /// already has an active edit.
    pub fn begin_edit(&mut self, row: usize, column: &str) -> Result<(), GridError> {
        self.editable_column(column)?;
        let table = self.table_ref()?;
        if row >= table.row_count() {
            return Err(GridError::RowOutOfRange(row));
        }
        let key = CellKey::new(row, column);
        if self.edits.contains_key(&key) {
            return Err(GridError::EditInProgress {
                row,
                column: column.to_string(),
            });
        }
        let original = table.cell(row, column).cloned().unwrap_or(Value::Null);
        self.edits.insert(
            key,
            ActiveEdit {
                edited: original.clone(),
                original,
                dirty: false,
                valid: true,
            },
        );
        Ok(())
    }

    /// Change the in-flight value of an active edit and arm its debounced
    /// validation. `now` comes from the host event loop.
    pub fn update_cell_value(
        &mut self,
        row: usize,
        column: &str,
        value: Value,
        now: Instant,
    ) -> Result<(), GridError> {
        let key = CellKey::new(row, column);
        let edit = self.edits.get_mut(&key).ok_or(GridError::NoActiveEdit {
            row,
            column: column.to_string(),
        })?;
        edit.dirty = value != edit.original;
        edit.edited = value;
        self.debounce.schedule(key, now);
        Ok(())
    }

    /// Run validations whose debounce deadline has passed, firing the
    /// registered callbacks. Deadlines for cells whose edit was cancelled
    /// or committed in the meantime are dropped silently.
    pub fn poll_validation(&mut self, now: Instant) -> Vec<ValidationEvent> {
        let due = self.debounce.due(now);
        let mut events = Vec::with_capacity(due.len());
        for key in due {
            let Some(edit) = self.edits.get(&key) else {
                continue;
            };
            let value = edit.edited.clone();
            let outcome = self.validate_cached(&key.column, &value);
            if let Some(edit) = self.edits.get_mut(&key) {
                edit.valid = outcome.is_valid;
            }
            let event = ValidationEvent {
                row: key.row,
                column: key.column.clone(),
                value,
                is_valid: outcome.is_valid,
                errors: outcome.errors,
            };
            for callback in &mut self.callbacks {
                callback(&event);
            }
            events.push(event);
        }
        events
    }

    /// Commit an active edit: re-validate synchronously, write through to
    /// the live snapshot, record the change. On validation failure the
    /// snapshot is untouched and the edit stays active.
    pub fn commit_edit(&mut self, row: usize, column: &str) -> Result<(), GridError> {
        let key = CellKey::new(row, column);
        let edit = self.edits.get(&key).ok_or(GridError::NoActiveEdit {
            row,
            column: column.to_string(),
        })?;
        let value = edit.edited.clone();

        let outcome = self.validate_cached(column, &value);
        if !outcome.is_valid {
            return Err(GridError::Validation {
                errors: outcome.errors,
            });
        }

        let table = self.table_mut()?;
        let previous = table.cell(row, column).cloned().unwrap_or(Value::Null);
        table.set_cell(row, column, value.clone());
        self.tracker.record_cell_change(row, column, previous, value);
        self.edits.remove(&key);
        self.debounce.cancel(&key);
        Ok(())
    }

    /// Drop an active edit without touching table data or the tracker.
    pub fn cancel_edit(&mut self, row: usize, column: &str) -> Result<(), GridError> {
        let key = CellKey::new(row, column);
        if self.edits.remove(&key).is_none() {
            return Err(GridError::NoActiveEdit {
                row,
                column: column.to_string(),
            });
        }
        self.debounce.cancel(&key);
        Ok(())
    }

    pub fn active_edit(&self, row: usize, column: &str) -> Option<&ActiveEdit> {
        self.edits.get(&CellKey::new(row, column))
    }

    /// Validate through the (column id, value) cache. Identical pairs skip
    /// re-validation; the cache clears on reload, rollback, and commit.
    fn validate_cached(&mut self, column: &str, value: &Value) -> ValidationOutcome {
        let cache_key = (column.to_string(), value.clone());
        if let Some(hit) = self.validation_cache.get(&cache_key) {
            return hit.clone();
        }
        let outcome = match self.table.as_ref().and_then(|t| t.column(column)) {
            Some(col) => self.validator.validate(value, col),
            None => ValidationOutcome::fail(format!("unknown column: {}", column)),
        };
        self.validation_cache.insert(cache_key, outcome.clone());
        outcome
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Append a row built from column defaults and record the addition.
    pub fn add_row(&mut self) -> Result<usize, GridError> {
        self.add_row_with(Row::new())
    }

    /// Append a row from defaults overlaid with `overrides`.
    pub fn add_row_with(&mut self, overrides: Row) -> Result<usize, GridError> {
        let table = self.table_mut()?;
        let mut row = table.default_row();
        row.extend(overrides);
        table.rows.push(row.clone());
        table.total_rows += 1;
        let index = table.rows.len() - 1;
        self.tracker.record_row_addition(index, row);
        Ok(index)
    }

    /// Tombstone a row. It stays in the snapshot until commit.
    pub fn delete_row(&mut self, row: usize) -> Result<(), GridError> {
        let table = self.table_ref()?;
        let data = table
            .rows
            .get(row)
            .cloned()
            .ok_or(GridError::RowOutOfRange(row))?;
        self.tracker.record_row_deletion(row, data);
        Ok(())
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    pub fn run_bulk(&mut self, operation: BulkOperation) -> Result<BulkOutcome, GridError> {
        match operation {
            BulkOperation::Update(update) => self.run_bulk_update(update),
            BulkOperation::Delete { rows } => self.run_bulk_delete(&rows),
        }
    }

    /// Two-phase bulk update: every target is validated before anything is
    /// applied, so a failing batch mutates nothing.
    fn run_bulk_update(&mut self, op: BulkUpdate) -> Result<BulkOutcome, GridError> {
        self.editable_column(&op.column)?;

        // Phase 1: plan. Resolve rows, apply the condition, compute values.
        let mut planned: Vec<(usize, Value)> = Vec::new();
        let mut errors: Vec<String> = Vec::new();
        {
            let table = self.table_ref()?;
            for (i, &row) in op.rows.iter().enumerate() {
                let Some(data) = table.rows.get(row) else {
                    errors.push(format!("row {} out of range", row));
                    continue;
                };
                if let Some(condition) = &op.condition {
                    if !condition(data) {
                        continue;
                    }
                }
                let value = match &op.source {
                    BulkSource::Fixed(v) => v.clone(),
                    BulkSource::Compute(f) => f(data, i),
                };
                planned.push((row, value));
            }
        }

        // Phase 1 continued: validate every planned write.
        for (row, value) in &planned {
            let outcome = self.validate_cached(&op.column, value);
            if !outcome.is_valid {
                errors.push(format!(
                    "row {}, column {}: {}",
                    row,
                    op.column,
                    outcome.errors.join("; ")
                ));
            }
        }
        if !errors.is_empty() {
            return Err(GridError::Validation { errors });
        }

        // Phase 2: apply.
        let mut affected = 0usize;
        for (row, value) in planned {
            let table = self.table_mut()?;
            let previous = table.cell(row, &op.column).cloned().unwrap_or(Value::Null);
            table.set_cell(row, &op.column, value.clone());
            self.tracker
                .record_cell_change(row, &op.column, previous, value);
            affected += 1;
        }
        debug!(column = %op.column, affected, "bulk update applied");
        Ok(BulkOutcome {
            affected_rows: affected,
        })
    }

    fn run_bulk_delete(&mut self, rows: &[usize]) -> Result<BulkOutcome, GridError> {
        self.table_ref()?;
        let mut affected = 0usize;
        for &row in rows {
            if self.delete_row(row).is_ok() {
                affected += 1;
            }
        }
        debug!(affected, "bulk delete recorded");
        Ok(BulkOutcome {
            affected_rows: affected,
        })
    }

    /// What a bulk update would change, without mutating or validating.
    pub fn preview_bulk(&self, op: &BulkUpdate) -> Result<Vec<BulkPreviewEntry>, GridError> {
        let table = self.table_ref()?;
        table
            .column(&op.column)
            .ok_or_else(|| GridError::UnknownColumn(op.column.clone()))?;

        let mut entries = Vec::new();
        for (i, &row) in op.rows.iter().enumerate() {
            let Some(data) = table.rows.get(row) else {
                continue;
            };
            if let Some(condition) = &op.condition {
                if !condition(data) {
                    continue;
                }
            }
            let proposed = match &op.source {
                BulkSource::Fixed(v) => v.clone(),
                BulkSource::Compute(f) => f(data, i),
            };
            let current = data.get(&op.column).cloned().unwrap_or(Value::Null);
            if proposed != current {
                entries.push(BulkPreviewEntry {
                    row,
                    column: op.column.clone(),
                    current,
                    proposed,
                });
            }
        }
        Ok(entries)
    }

    // =========================================================================
    // Copy / paste
    // =========================================================================

    /// Copy cells into a dense payload. A single ref yields a single-cell
    /// payload; multiple refs copy the rectangle over the deduplicated
    /// row and column axes, in first-appearance order.
    pub fn copy_cells(&self, refs: &[CellKey]) -> Result<CopyPayload, GridError> {
        let table = self.table_ref()?;

        if refs.len() == 1 {
            let r = &refs[0];
            let value = table.cell(r.row, &r.column).cloned().unwrap_or(Value::Null);
            return Ok(CopyPayload {
                kind: CopyKind::SingleCell,
                data: vec![vec![value]],
            });
        }

        let mut rows: Vec<usize> = Vec::new();
        let mut columns: Vec<&str> = Vec::new();
        for r in refs {
            if !rows.contains(&r.row) {
                rows.push(r.row);
            }
            if !columns.contains(&r.column.as_str()) {
                columns.push(&r.column);
            }
        }

        let data = rows
            .iter()
            .map(|&row| {
                columns
                    .iter()
                    .map(|col| table.cell(row, col).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Ok(CopyPayload {
            kind: CopyKind::Range,
            data,
        })
    }

    /// Paste a payload row-major starting at `start`.
    ///
    /// Rows past the end auto-append when the option is set, otherwise
    /// pasting stops there. Columns past the schema truncate the rest of
    /// that pasted row. Validation failures stop the paste (reporting the
    /// partial cell count) unless `skip_validation_errors` accumulates
    /// them and continues.
    pub fn paste_cells(
        &mut self,
        payload: &CopyPayload,
        start: &CellKey,
        options: &PasteOptions,
    ) -> Result<PasteOutcome, GridError> {
        let (start_col, columns) = {
            let table = self.table_ref()?;
            let idx = table
                .column_index(&start.column)
                .ok_or_else(|| GridError::UnknownColumn(start.column.clone()))?;
            (idx, table.columns.clone())
        };

        let mut outcome = PasteOutcome::default();

        'rows: for (r_off, values) in payload.data.iter().enumerate() {
            let target_row = start.row + r_off;
            while target_row >= self.row_count() {
                if !options.auto_expand_rows {
                    break 'rows;
                }
                self.add_row()?;
            }

            for (c_off, value) in values.iter().enumerate() {
                let Some(column) = columns.get(start_col + c_off) else {
                    break;
                };
                let column_id = column.id.clone();

                let check = match column.non_editable_reason() {
                    Some(reason) => ValidationOutcome::fail(format!(
                        "column '{}' is not editable ({})",
                        column_id, reason
                    )),
                    None => self.validate_cached(&column_id, value),
                };
                if !check.is_valid {
                    outcome.validation_errors.push(format!(
                        "row {}, column {}: {}",
                        target_row,
                        column_id,
                        check.errors.join("; ")
                    ));
                    if options.skip_validation_errors {
                        continue;
                    }
                    return Ok(outcome);
                }

                let table = self.table_mut()?;
                let previous = table
                    .cell(target_row, &column_id)
                    .cloned()
                    .unwrap_or(Value::Null);
                table.set_cell(target_row, &column_id, value.clone());
                self.tracker
                    .record_cell_change(target_row, &column_id, previous, value.clone());
                outcome.affected_cells += 1;
            }
        }

        debug!(
            affected = outcome.affected_cells,
            errors = outcome.validation_errors.len(),
            "paste applied"
        );
        Ok(outcome)
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Fetch and append the next page of rows. The tracking baseline is
    /// extended alongside so later edits diff correctly. Not available
    /// while row additions are pending - appended pages would land after
    /// them and misalign the baseline.
    pub fn load_more(&mut self, provider: &mut dyn RowProvider) -> Result<usize, GridError> {
        if self.tracker.statistics().added_rows > 0 {
            return Err(GridError::PendingAdditions);
        }
        let (offset, limit, total) = {
            let table = self.table_ref()?;
            let limit = if table.limit == 0 { 50 } else { table.limit };
            (table.offset + table.rows.len(), limit, table.total_rows)
        };
        if offset >= total {
            return Ok(0);
        }

        let page = provider.fetch(offset, limit)?;
        let fetched = page.rows.len();
        self.tracker.extend_baseline(&page.rows);
        let table = self.table_mut()?;
        table.rows.extend(page.rows);
        table.total_rows = page.total_rows;
        debug!(offset, fetched, "loaded more rows");
        Ok(fetched)
    }

    // =========================================================================
    // Rollback / commit
    // =========================================================================

    /// Restore every tracked change in the live snapshot, then clear
    /// tracking state, active edits, pending validations, and the
    /// validation cache.
    pub fn rollback_changes(&mut self) {
        let record = self.tracker.change_record();
        if let Some(table) = self.table.as_mut() {
            for (key, change) in &record.modified_cells {
                table.set_cell(key.row, &key.column, change.original.clone());
            }
            // Added rows are appends; remove from the highest index down.
            let mut added: Vec<usize> = record.added_rows.iter().map(|a| a.row).collect();
            added.sort_unstable_by(|a, b| b.cmp(a));
            for row in added {
                if row < table.rows.len() {
                    table.rows.remove(row);
                    table.total_rows = table.total_rows.saturating_sub(1);
                }
            }
        }
        self.tracker.rollback_all();
        self.edits.clear();
        self.validation_cache.clear();
        self.debounce.clear();
        info!("rolled back all pending changes");
    }

    /// Undo one committed cell edit, restoring the original value.
    pub fn rollback_cell(&mut self, row: usize, column: &str) -> Result<(), GridError> {
        if let Some(change) = self.tracker.rollback_cell_change(row, column) {
            self.table_mut()?.set_cell(row, column, change.original);
        }
        Ok(())
    }

    /// Undo a pending row addition, removing the appended row.
    pub fn rollback_row_addition(&mut self, row: usize) -> Result<(), GridError> {
        if self.tracker.rollback_row_addition(row).is_some() {
            let table = self.table_mut()?;
            if row < table.rows.len() {
                table.rows.remove(row);
                table.total_rows = table.total_rows.saturating_sub(1);
            }
        }
        Ok(())
    }

    /// Undo a pending row deletion; the tombstone is lifted and the row
    /// becomes visible again.
    pub fn rollback_row_deletion(&mut self, row: usize) {
        self.tracker.rollback_row_deletion(row);
    }

    /// Generate statements for the pending diff, physically remove
    /// tombstoned rows, and re-baseline at the committed state.
    ///
    /// This does not verify external persistence; callers that need
    /// durability execute the returned statements first.
    pub fn commit_changes(&mut self) -> Result<Vec<SqlStatement>, GridError> {
        let table_name = self.table_ref()?.name.clone();
        let statements = self.tracker.statements(&table_name);
        let stats = self.tracker.statistics();

        let mut doomed: Vec<usize> = self
            .tracker
            .deleted_rows()
            .iter()
            .map(|d| d.row)
            .collect();
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        let table = self.table_mut()?;
        for row in doomed {
            if row < table.rows.len() {
                table.rows.remove(row);
                table.total_rows = table.total_rows.saturating_sub(1);
            }
        }

        if let Some(table) = self.table.clone() {
            self.tracker.set_baseline(table);
        }
        self.edits.clear();
        self.validation_cache.clear();
        self.debounce.clear();
        info!(
            statements = statements.len(),
            changes = stats.total_changes,
            "committed pending changes"
        );
        Ok(statements)
    }

    // =========================================================================
    // Tracker passthroughs
    // =========================================================================

    pub fn has_changes(&self) -> bool {
        self.tracker.has_changes()
    }

    pub fn change_record(&self) -> ChangeRecord {
        self.tracker.change_record()
    }

    pub fn statistics(&self) -> ChangeStatistics {
        self.tracker.statistics()
    }

    pub fn summary(&self) -> ChangeSummary {
        self.tracker.summary()
    }
}
