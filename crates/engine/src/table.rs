use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;
use crate::value::Value;

/// One row as a sorted map of column id to value.
///
/// BTreeMap keeps iteration deterministic, which generated SQL and exports
/// rely on.
pub type Row = BTreeMap<String, Value>;

/// Composite key addressing a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub row: usize,
    pub column: String,
}

impl CellKey {
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A named result-set window: schema, the loaded rows, and where this
/// window sits in the full result set.
///
/// Owned exclusively by the grid session; replaced wholesale on reload,
/// mutated in place on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Row>,
    /// Total rows in the underlying result set, not just this window.
    pub total_rows: usize,
    pub offset: usize,
    pub limit: usize,
}

impl TableSnapshot {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
            total_rows: 0,
            offset: 0,
            limit: 0,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.total_rows = rows.len();
        self.rows = rows;
        self
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// First column flagged as primary key, if any.
    pub fn primary_key_column(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Write a cell, treating a missing key as `Null` being replaced.
    pub fn set_cell(&mut self, row: usize, column: &str, value: Value) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.insert(column.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Build a fresh row from column defaults (declared default or `Null`).
    pub fn default_row(&self) -> Row {
        self.columns
            .iter()
            .map(|c| {
                let v = c.default_value.clone().unwrap_or(Value::Null);
                (c.id.clone(), v)
            })
            .collect()
    }
}

/// Helper for building rows in tests and loaders.
pub fn row_from(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
