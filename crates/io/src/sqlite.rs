//! SQLite-backed schema introspection, paginated row fetch, and statement
//! execution.
//!
//! This is deliberately a thin layer over the driver: the engine owns all
//! editing semantics, this module only moves rows and binds parameters.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use gridbase_engine::sql::quote_ident;
use gridbase_engine::{
    ColumnDef, ColumnType, GridError, Row, RowPage, RowProvider, SqlStatement, TableSnapshot,
    Value,
};

use crate::error::IoError;

/// Introspect a table's columns via `PRAGMA table_info`.
///
/// An `INTEGER PRIMARY KEY` column is treated as auto-increment: SQLite
/// aliases it to the rowid and assigns values on insert.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnDef>, IoError> {
    let sql = format!("PRAGMA table_info({})", quote_ident(table));
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;

    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        let declared: String = row.get("type")?;
        let not_null: bool = row.get::<_, i64>("notnull")? != 0;
        let pk: bool = row.get::<_, i64>("pk")? != 0;
        let default_text: Option<String> = row.get("dflt_value")?;

        let mut column = ColumnDef::new(name, declared);
        column.nullable = !not_null && !pk;
        column.primary_key = pk;
        column.auto_increment = pk && column.column_type() == ColumnType::Integer;
        column.default_value = default_text.as_deref().map(parse_default);
        columns.push(column);
    }

    if columns.is_empty() {
        return Err(IoError::UnknownTable(table.to_string()));
    }
    Ok(columns)
}

/// Parse the SQL literal `PRAGMA table_info` reports as a default value.
fn parse_default(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if trimmed.len() >= 2 && trimmed.starts_with('\'') && trimmed.ends_with('\'') {
        return Value::Text(trimmed[1..trimmed.len() - 1].replace("''", "'"));
    }
    Value::from_input(trimmed)
}

fn value_from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Int(n),
        ValueRef::Real(f) => Value::from(f),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => {
            let mut hex = String::with_capacity(2 + bytes.len() * 2);
            hex.push_str("0x");
            for b in bytes {
                hex.push_str(&format!("{:02x}", b));
            }
            Value::Text(hex)
        }
    }
}

fn value_to_sql(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Bool(b) => rusqlite::types::Value::Integer(*b as i64),
        Value::Int(n) => rusqlite::types::Value::Integer(*n),
        Value::Float(f) => rusqlite::types::Value::Real(f.into_inner()),
        Value::Text(s) => rusqlite::types::Value::Text(s.clone()),
        Value::Timestamp(ts) => {
            rusqlite::types::Value::Text(ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
    }
}

fn fetch_page(
    conn: &Connection,
    table: &str,
    columns: &[ColumnDef],
    offset: usize,
    limit: usize,
) -> Result<RowPage, IoError> {
    let total_rows: usize = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
        [],
        |row| row.get::<_, i64>(0),
    )? as usize;

    let sql = format!(
        "SELECT * FROM {} LIMIT ?1 OFFSET ?2",
        quote_ident(table)
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut result = stmt.query(rusqlite::params![limit as i64, offset as i64])?;

    let mut rows: Vec<Row> = Vec::new();
    while let Some(db_row) = result.next()? {
        let mut row = Row::new();
        for (i, column) in columns.iter().enumerate() {
            let raw = value_from_sql(db_row.get_ref(i)?);
            let value = coerce_declared(raw, column);
            row.insert(column.id.clone(), value);
        }
        rows.push(row);
    }

    Ok(RowPage { rows, total_rows })
}

/// SQLite stores timestamps as text; lift values into the engine's typed
/// form where the declared type says so.
fn coerce_declared(value: Value, column: &ColumnDef) -> Value {
    match (&value, column.column_type()) {
        (Value::Text(s), ColumnType::Timestamp) => {
            match DateTime::parse_from_rfc3339(s.trim()) {
                Ok(ts) => Value::Timestamp(ts.with_timezone(&Utc)),
                Err(_) => value,
            }
        }
        (Value::Int(n), ColumnType::Boolean) if *n == 0 || *n == 1 => Value::Bool(*n == 1),
        _ => value,
    }
}

/// Paginated row access for one table, usable as the grid's row provider.
pub struct SqliteProvider<'c> {
    conn: &'c Connection,
    table: String,
    columns: Vec<ColumnDef>,
}

impl<'c> SqliteProvider<'c> {
    pub fn open(conn: &'c Connection, table: impl Into<String>) -> Result<Self, IoError> {
        let table = table.into();
        let columns = table_columns(conn, &table)?;
        Ok(Self {
            conn,
            table,
            columns,
        })
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn page(&self, offset: usize, limit: usize) -> Result<RowPage, IoError> {
        fetch_page(self.conn, &self.table, &self.columns, offset, limit)
    }

    /// Build a snapshot of one result-set window.
    pub fn snapshot(&self, offset: usize, limit: usize) -> Result<TableSnapshot, IoError> {
        let page = self.page(offset, limit)?;
        let mut snapshot = TableSnapshot::new(self.table.clone(), self.columns.clone());
        snapshot.total_rows = page.total_rows;
        snapshot.rows = page.rows;
        snapshot.offset = offset;
        snapshot.limit = limit;
        Ok(snapshot)
    }
}

impl RowProvider for SqliteProvider<'_> {
    fn fetch(&mut self, offset: usize, limit: usize) -> Result<RowPage, GridError> {
        self.page(offset, limit)
            .map_err(|e| GridError::Provider(e.to_string()))
    }
}

/// Snapshot a whole table (or a window of it) in one call.
pub fn snapshot(
    conn: &Connection,
    table: &str,
    offset: usize,
    limit: usize,
) -> Result<TableSnapshot, IoError> {
    SqliteProvider::open(conn, table)?.snapshot(offset, limit)
}

/// Execute generated statements inside a single transaction, binding each
/// statement's params. Returns the total number of rows affected.
pub fn apply_statements(
    conn: &mut Connection,
    statements: &[SqlStatement],
) -> Result<usize, IoError> {
    let tx = conn.transaction()?;
    let mut affected = 0usize;
    for stmt in statements {
        affected += tx.execute(
            &stmt.sql,
            params_from_iter(stmt.params.iter().map(value_to_sql)),
        )?;
    }
    tx.commit()?;
    debug!(statements = statements.len(), affected, "applied statements");
    Ok(affected)
}
